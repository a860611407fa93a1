//! Shared test drivers and fixtures.

#![allow(dead_code)]

use async_trait::async_trait;
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use storybook_core::{GenerateRequest, GenerateResponse, Output};
use storybook_error::{ClientError, ClientErrorKind, StorybookResult};
use storybook_interface::StorybookDriver;

/// Driver that replays a queue of canned responses and records every
/// request it receives.
#[derive(Clone, Default)]
pub struct MockDriver {
    responses: Arc<Mutex<Vec<GenerateResponse>>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockDriver {
    pub fn new(responses: Vec<GenerateResponse>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every request received so far, in call order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorybookDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> StorybookResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());
        let mut queue = self.responses.lock().unwrap();
        if queue.is_empty() {
            return Err(ClientError::new(ClientErrorKind::ApiRequest(
                "mock response queue exhausted".to_string(),
            ))
            .into());
        }
        Ok(queue.remove(0))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock/default"
    }
}

/// Driver that fails every request with an HTTP 500.
pub struct FailingDriver;

#[async_trait]
impl StorybookDriver for FailingDriver {
    async fn generate(&self, _req: &GenerateRequest) -> StorybookResult<GenerateResponse> {
        Err(ClientError::new(ClientErrorKind::Http {
            status_code: 500,
            message: "internal server error".to_string(),
        })
        .into())
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }

    fn model_name(&self) -> &str {
        "failing/default"
    }
}

/// A response carrying a single text output.
pub fn text_response(text: impl Into<String>) -> GenerateResponse {
    GenerateResponse {
        outputs: vec![Output::Text(text.into())],
    }
}

/// A response carrying a single image output.
pub fn image_response(bytes: Vec<u8>) -> GenerateResponse {
    GenerateResponse {
        outputs: vec![Output::Image {
            mime: Some("image/png".to_string()),
            data: bytes,
        }],
    }
}

/// Encode a solid-color PNG for use as a fake generated illustration.
pub fn png_bytes(width: u32, height: u32, shade: u8) -> Vec<u8> {
    let canvas = image::RgbImage::from_pixel(width, height, image::Rgb([shade, shade, shade]));
    let mut png = Vec::new();
    image::DynamicImage::ImageRgb8(canvas)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();
    png
}

/// Encode a solid-color JPEG, standing in for a non-PNG delivery.
pub fn jpeg_bytes(width: u32, height: u32, shade: u8) -> Vec<u8> {
    let canvas = image::RgbImage::from_pixel(width, height, image::Rgb([shade, shade, shade]));
    let mut jpeg = Vec::new();
    image::DynamicImage::ImageRgb8(canvas)
        .write_to(&mut Cursor::new(&mut jpeg), image::ImageFormat::Jpeg)
        .unwrap();
    jpeg
}

/// A well-formed ten-page script in the format the parser expects.
pub fn ten_page_script() -> String {
    (1..=10)
        .map(|n| format!("Page {n}: Sentence number {n}."))
        .collect::<Vec<_>>()
        .join("\n")
}
