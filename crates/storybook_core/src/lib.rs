//! Core data types for the storybook pipeline.
//!
//! This crate provides the foundation data types shared by the client,
//! pipeline, and presentation crates: the story prompt and page types, the
//! durable book manifest, and the multimodal request/response vocabulary
//! spoken by LLM drivers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod image;
mod input;
mod manifest;
mod media;
mod message;
mod output;
mod page;
mod prompt;
mod request;
mod role;

pub use image::PageImage;
pub use input::Input;
pub use manifest::{BookManifest, PageEntry};
pub use media::MediaSource;
pub use message::Message;
pub use output::Output;
pub use page::{PAGE_COUNT, Page};
pub use prompt::StoryPrompt;
pub use request::{GenerateRequest, GenerateResponse, Modality};
pub use role::Role;
