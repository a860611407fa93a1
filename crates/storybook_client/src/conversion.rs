//! Conversion between core request types and the OpenRouter wire format.

use crate::dto::{ChatMessage, ChatRequest, ContentPart, ImageUrlPayload};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use storybook_core::{GenerateRequest, Input, MediaSource, Role};
use storybook_error::{ClientError, ClientErrorKind};

/// Wire name for a message role.
fn role_name(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

/// Encode image bytes as a base64 data URL.
///
/// # Examples
///
/// ```
/// use storybook_client::conversion::data_url;
///
/// let url = data_url(Some("image/png"), &[0x89, 0x50]);
/// assert!(url.starts_with("data:image/png;base64,"));
/// ```
pub fn data_url(mime: Option<&str>, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime.unwrap_or("image/png"),
        STANDARD.encode(bytes)
    )
}

/// Split a data URL into its MIME type and base64 payload.
///
/// Returns `None` when the string is not a `data:image` URL (i.e. it should
/// be treated as a remote URL instead).
///
/// # Examples
///
/// ```
/// use storybook_client::conversion::parse_data_url;
///
/// let (mime, payload) = parse_data_url("data:image/png;base64,aGk=").unwrap();
/// assert_eq!(mime.as_deref(), Some("image/png"));
/// assert_eq!(payload, "aGk=");
///
/// assert!(parse_data_url("https://example.com/pic.png").is_none());
/// ```
pub fn parse_data_url(url: &str) -> Option<(Option<String>, &str)> {
    if !url.starts_with("data:image") {
        return None;
    }
    let (header, payload) = url.split_once(',')?;
    let mime = header
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .filter(|m| !m.is_empty())
        .map(str::to_string);
    Some((mime, payload))
}

/// Convert an input to a wire content part.
fn to_content_part(input: &Input) -> Result<ContentPart, ClientError> {
    match input {
        Input::Text(text) => Ok(ContentPart::Text { text: text.clone() }),
        Input::Image { mime, source } => {
            let url = match source {
                MediaSource::Url(url) => url.clone(),
                MediaSource::Base64(payload) => format!(
                    "data:{};base64,{}",
                    mime.as_deref().unwrap_or("image/png"),
                    payload
                ),
                MediaSource::Binary(bytes) => data_url(mime.as_deref(), bytes),
            };
            Ok(ContentPart::ImageUrl {
                image_url: ImageUrlPayload::new(url),
            })
        }
    }
}

/// Convert a core generation request to a chat-completions request.
///
/// Text-only messages serialize as plain string content; messages carrying
/// an image use the multipart form.
pub fn to_chat_request(
    req: &GenerateRequest,
    default_model: &str,
) -> Result<ChatRequest, ClientError> {
    let mut messages = Vec::with_capacity(req.messages.len());
    for msg in &req.messages {
        let role = role_name(msg.role);
        let message = match msg.content.as_slice() {
            [Input::Text(text)] => ChatMessage::text(role, text.clone()),
            parts => {
                let parts = parts
                    .iter()
                    .map(to_content_part)
                    .collect::<Result<Vec<_>, _>>()?;
                ChatMessage::parts(role, parts)
            }
        };
        messages.push(message);
    }

    let modalities = if req.modalities.is_empty() {
        None
    } else {
        Some(req.modalities.iter().map(|m| m.to_string()).collect())
    };

    ChatRequest::builder()
        .model(
            req.model
                .clone()
                .unwrap_or_else(|| default_model.to_string()),
        )
        .messages(messages)
        .temperature(req.temperature)
        .modalities(modalities)
        .build()
        .map_err(|e| ClientError::new(ClientErrorKind::ApiRequest(e.to_string())))
}
