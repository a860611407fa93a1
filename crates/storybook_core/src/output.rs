//! Output types from LLM responses.

use serde::{Deserialize, Serialize};

/// Supported output types from LLMs.
///
/// # Examples
///
/// ```
/// use storybook_core::Output;
///
/// let text = Output::Text("Page 1: The mouse set out.".to_string());
/// let image = Output::Image {
///     mime: Some("image/png".to_string()),
///     data: vec![0x89, 0x50, 0x4E, 0x47],
/// };
/// assert_ne!(text, image);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),

    /// Generated image output.
    Image {
        /// MIME type of the image
        mime: Option<String>,
        /// Binary image data
        data: Vec<u8>,
    },
}

impl Output {
    /// The text content, if this output is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The image bytes, if this output is an image.
    pub fn as_image(&self) -> Option<&[u8]> {
        match self {
            Output::Image { data, .. } => Some(data),
            _ => None,
        }
    }
}
