//! OpenRouter chat-completions data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One part of a multipart message content array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// A text fragment
    Text {
        /// The text content
        text: String,
    },
    /// An image, inline as a data URL or by remote URL
    ImageUrl {
        /// The image payload
        image_url: ImageUrlPayload,
    },
}

/// Image URL payload shared by requests and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ImageUrlPayload {
    /// A data URL (`data:image/png;base64,...`) or remote URL
    url: String,
}

impl ImageUrlPayload {
    /// Wrap a URL string.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Message content: either a plain string or a multipart array.
///
/// The wire format accepts both; the client sends a plain string for
/// text-only messages (as the text completions do) and the multipart form
/// when a style-reference image is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatContent {
    /// Plain string content
    Text(String),
    /// Multipart content
    Parts(Vec<ContentPart>),
}

/// A message in a chat-completions request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatMessage {
    /// Sender role: "system", "user", or "assistant"
    role: String,
    /// Message content
    content: ChatContent,
}

impl ChatMessage {
    /// A message with plain string content.
    pub fn text(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: ChatContent::Text(text.into()),
        }
    }

    /// A message with multipart content.
    pub fn parts(role: impl Into<String>, parts: Vec<ContentPart>) -> Self {
        Self {
            role: role.into(),
            content: ChatContent::Parts(parts),
        }
    }
}

/// OpenRouter chat-completions request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    /// Requested output modalities (e.g. `["image", "text"]`)
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    modalities: Option<Vec<String>>,
}

impl ChatRequest {
    /// Creates a new builder for `ChatRequest`.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// A generated image entry in the response message's `images` extension
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeneratedImage {
    /// The image payload
    image_url: ImageUrlPayload,
}

impl GeneratedImage {
    /// Wrap an image payload.
    pub fn new(image_url: ImageUrlPayload) -> Self {
        Self { image_url }
    }
}

/// The assistant message in a chat-completions response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatResponseMessage {
    /// Text content, if any
    #[serde(default)]
    content: Option<String>,
    /// Generated images, if any (OpenRouter extension field)
    #[serde(default)]
    images: Option<Vec<GeneratedImage>>,
}

impl ChatResponseMessage {
    /// The first generated image's URL, if any.
    ///
    /// The pipeline consumes one illustration per call, so any further
    /// entries in the `images` list are ignored rather than resolved.
    pub fn first_image_url(&self) -> Option<&str> {
        self.images
            .as_deref()
            .and_then(|images| images.first())
            .map(|image| image.image_url().url().as_str())
    }
}

/// One choice in a chat-completions response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatChoice {
    /// The assistant message
    message: ChatResponseMessage,
}

/// OpenRouter chat-completions response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatResponse {
    /// Response choices; the client uses the first
    choices: Vec<ChatChoice>,
}
