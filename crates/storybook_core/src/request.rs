//! Request and response types for LLM generation.

use crate::{Message, Output};
use serde::{Deserialize, Serialize};

/// Requested output modality for a generation call.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    /// Text completions
    #[display("text")]
    Text,
    /// Generated images
    #[display("image")]
    Image,
}

/// Generic generation request (multimodal-safe).
///
/// # Examples
///
/// ```
/// use storybook_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest {
///     messages: vec![Message::user("Hello!")],
///     temperature: Some(0.7),
///     model: Some("google/gemini-2.5-flash-preview-09-2025".to_string()),
///     ..Default::default()
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// assert!(request.modalities.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f64>,
    /// Model identifier to use
    pub model: Option<String>,
    /// Requested output modalities; empty means provider default (text)
    pub modalities: Vec<Modality>,
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use storybook_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![Output::Text("Page 1: Hello.".to_string())],
/// };
///
/// assert_eq!(response.outputs.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// First text output, if any.
    pub fn text(&self) -> Option<&str> {
        self.outputs.iter().find_map(Output::as_text)
    }

    /// First image output's bytes, if any.
    pub fn image(&self) -> Option<&[u8]> {
        self.outputs.iter().find_map(Output::as_image)
    }
}
