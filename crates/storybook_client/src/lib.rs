//! OpenRouter API client for the storybook pipeline.
//!
//! This crate speaks the OpenRouter chat-completions wire format over
//! reqwest. One client serves both generation calls the pipeline makes:
//!
//! - **Script generation**: a plain text completion against the text model.
//! - **Illustration generation**: a request against the image-capable model
//!   with `modalities: ["image", "text"]`, optionally carrying an inline
//!   base64 style-reference image. Generated images arrive in the response
//!   message's `images` extension field as data URLs or remote URLs; the
//!   client decodes or fetches the first entry into raw bytes.
//!
//! Configuration is an explicitly constructed [`OpenRouterConfig`] value
//! rather than process-global state, so tests can point the client at a mock
//! endpoint.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
pub mod conversion;
mod dto;

pub use client::OpenRouterClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, OpenRouterConfig};
pub use dto::{
    ChatChoice, ChatContent, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse,
    ChatResponseMessage, ContentPart, GeneratedImage, ImageUrlPayload,
};
