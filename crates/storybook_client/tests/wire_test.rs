//! Tests for the OpenRouter wire format: request conversion shapes and
//! response envelope parsing.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::json;
use storybook_client::conversion::{data_url, parse_data_url, to_chat_request};
use storybook_client::{ChatContent, ChatResponse};
use storybook_core::{GenerateRequest, Input, MediaSource, Message, Modality};

#[test]
fn text_only_message_serializes_as_plain_string_content() {
    let req = GenerateRequest {
        messages: vec![
            Message::system("You are a children's book author."),
            Message::user("Write a story."),
        ],
        temperature: Some(0.7),
        model: Some("test/model".to_string()),
        modalities: Vec::new(),
    };

    let chat = to_chat_request(&req, "default/model").unwrap();
    let value = serde_json::to_value(&chat).unwrap();

    assert_eq!(value["model"], "test/model");
    assert_eq!(value["messages"][0]["role"], "system");
    assert_eq!(
        value["messages"][0]["content"],
        "You are a children's book author."
    );
    assert_eq!(value["messages"][1]["role"], "user");
    assert_eq!(value["messages"][1]["content"], "Write a story.");
    assert_eq!(value["temperature"], 0.7);
    // Empty modalities means provider default; the key must be absent.
    assert!(value.get("modalities").is_none());
}

#[test]
fn image_message_serializes_as_multipart_with_inline_data_url() {
    let bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A];
    let req = GenerateRequest {
        messages: vec![Message::user_parts(vec![
            Input::Text("Reference image for style:".to_string()),
            Input::Image {
                mime: Some("image/png".to_string()),
                source: MediaSource::Binary(bytes.clone()),
            },
            Input::Text("Draw page 2.".to_string()),
        ])],
        temperature: None,
        model: Some("test/image-model".to_string()),
        modalities: vec![Modality::Image, Modality::Text],
    };

    let chat = to_chat_request(&req, "default/model").unwrap();
    let value = serde_json::to_value(&chat).unwrap();

    let parts = value["messages"][0]["content"].as_array().unwrap();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0]["type"], "text");
    assert_eq!(parts[0]["text"], "Reference image for style:");
    assert_eq!(parts[1]["type"], "image_url");
    let url = parts[1]["image_url"]["url"].as_str().unwrap();
    assert!(url.starts_with("data:image/png;base64,"));
    let payload = url.split_once(',').unwrap().1;
    assert_eq!(STANDARD.decode(payload).unwrap(), bytes);

    assert_eq!(value["modalities"], json!(["image", "text"]));
    assert!(value.get("temperature").is_none());
}

#[test]
fn default_model_fills_in_when_request_has_none() {
    let req = GenerateRequest {
        messages: vec![Message::user("hi")],
        ..Default::default()
    };
    let chat = to_chat_request(&req, "default/model").unwrap();
    assert_eq!(chat.model(), "default/model");
}

#[test]
fn data_url_round_trips() {
    let bytes = b"not really a png";
    let url = data_url(Some("image/png"), bytes);
    let (mime, payload) = parse_data_url(&url).unwrap();
    assert_eq!(mime.as_deref(), Some("image/png"));
    assert_eq!(STANDARD.decode(payload).unwrap(), bytes);
}

#[test]
fn parse_data_url_rejects_non_image_urls() {
    assert!(parse_data_url("https://example.com/pic.png").is_none());
    assert!(parse_data_url("data:text/plain;base64,aGk=").is_none());
}

#[test]
fn response_parses_text_and_images() {
    let raw = json!({
        "id": "gen-123",
        "choices": [{
            "message": {
                "role": "assistant",
                "content": "Here is your illustration.",
                "images": [{
                    "type": "image_url",
                    "image_url": {"url": "data:image/png;base64,aGk="}
                }]
            },
            "finish_reason": "stop"
        }]
    });

    let response: ChatResponse = serde_json::from_value(raw).unwrap();
    let message = response.choices()[0].message();
    assert_eq!(message.content().as_deref(), Some("Here is your illustration."));
    let images = message.images().as_ref().unwrap();
    assert_eq!(images[0].image_url().url(), "data:image/png;base64,aGk=");
}

#[test]
fn only_the_first_generated_image_is_selected() {
    let raw = json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "images": [
                    {"image_url": {"url": "data:image/png;base64,Zmlyc3Q="}},
                    {"image_url": {"url": "https://example.com/unreachable.png"}},
                    {"image_url": {"url": "data:image/png;base64,%%%bad%%%"}}
                ]
            }
        }]
    });

    let response: ChatResponse = serde_json::from_value(raw).unwrap();
    let message = response.choices()[0].message();
    // Later entries are never resolved, so a broken second or third image
    // cannot fail the call.
    assert_eq!(
        message.first_image_url(),
        Some("data:image/png;base64,Zmlyc3Q=")
    );
}

#[test]
fn first_image_url_is_none_without_images() {
    let raw = json!({
        "choices": [{"message": {"role": "assistant", "content": "hi"}}]
    });
    let response: ChatResponse = serde_json::from_value(raw).unwrap();
    assert!(response.choices()[0].message().first_image_url().is_none());
}

#[test]
fn response_tolerates_missing_images_field() {
    let raw = json!({
        "choices": [{
            "message": {"role": "assistant", "content": "Page 1: Hello."}
        }]
    });

    let response: ChatResponse = serde_json::from_value(raw).unwrap();
    let message = response.choices()[0].message();
    assert_eq!(message.content().as_deref(), Some("Page 1: Hello."));
    assert!(message.images().is_none());
}

#[test]
fn plain_string_content_deserializes_as_text_variant() {
    let content: ChatContent = serde_json::from_value(json!("hello")).unwrap();
    assert_eq!(content, ChatContent::Text("hello".to_string()));
}
