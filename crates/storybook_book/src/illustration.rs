//! Per-page illustration generation.

use std::io::Cursor;
use storybook_core::{
    GenerateRequest, Input, MediaSource, Message, Modality, PageImage, StoryPrompt,
};
use storybook_error::{ClientError, ClientErrorKind, StorybookResult};
use storybook_interface::StorybookDriver;
use tracing::warn;

/// Side length in pixels of the placeholder bitmap.
pub const PLACEHOLDER_SIZE: u32 = 512;

/// Height of the red banner strip marking a placeholder.
const BANNER_HEIGHT: u32 = 24;

/// Where a page's illustration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllustrationSource {
    /// The image endpoint delivered a real illustration.
    Generated,
    /// Generation failed and a placeholder bitmap was substituted.
    Placeholder {
        /// The error that caused the substitution
        error: String,
    },
}

/// The result of one illustration call.
///
/// Always carries an image; failures substitute the fixed-size placeholder
/// and record the error in [`IllustrationSource::Placeholder`] instead of
/// propagating.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct IllustrationOutcome {
    /// The delivered or substituted image
    image: PageImage,
    /// Whether the image is real or a placeholder
    source: IllustrationSource,
}

impl IllustrationOutcome {
    /// Whether this outcome degraded to the placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self.source, IllustrationSource::Placeholder { .. })
    }
}

/// Generate the illustration for one page.
///
/// Pages after the first pass page 1's image as `reference`; the instruction
/// then demands visual consistency and the reference travels inline as
/// base64 image data. Any failure (transport, missing images in the
/// response, undecodable payload) degrades to the placeholder; this function
/// never fails outward.
pub async fn generate_illustration<D: StorybookDriver>(
    driver: &D,
    model: &str,
    page_text: &str,
    page_number: usize,
    prompt: &StoryPrompt,
    reference: Option<&PageImage>,
) -> IllustrationOutcome {
    match illustrate(driver, model, page_text, page_number, prompt, reference).await {
        Ok(image) => IllustrationOutcome {
            image,
            source: IllustrationSource::Generated,
        },
        Err(e) => {
            warn!(page = page_number, error = %e, "Illustration failed, substituting placeholder");
            placeholder(e.to_string())
        }
    }
}

/// The fallible inner path: request, extract, decode.
async fn illustrate<D: StorybookDriver>(
    driver: &D,
    model: &str,
    page_text: &str,
    page_number: usize,
    prompt: &StoryPrompt,
    reference: Option<&PageImage>,
) -> StorybookResult<PageImage> {
    let instruction = build_instruction(page_text, page_number, prompt, reference.is_some());

    let content = match reference {
        Some(reference) => vec![
            Input::Text("Reference image for style:".to_string()),
            Input::Image {
                // PageImage bytes are always PNG: decode_image normalizes
                // deliveries and the placeholder is rendered as PNG.
                mime: Some("image/png".to_string()),
                source: MediaSource::Binary(reference.bytes().to_vec()),
            },
            Input::Text(instruction),
        ],
        None => vec![Input::Text(instruction)],
    };

    let request = GenerateRequest {
        messages: vec![Message::user_parts(content)],
        temperature: None,
        model: Some(model.to_string()),
        modalities: vec![Modality::Image, Modality::Text],
    };

    let response = driver.generate(&request).await?;
    let bytes = response
        .image()
        .ok_or_else(|| ClientError::new(ClientErrorKind::MissingImages))?
        .to_vec();
    decode_image(bytes)
}

/// Build the natural-language illustration instruction for a page.
fn build_instruction(
    page_text: &str,
    page_number: usize,
    prompt: &StoryPrompt,
    has_reference: bool,
) -> String {
    if has_reference {
        format!(
            "Children's book illustration. Use the same art style, color palette, \
             and visual aesthetic as the reference image provided.\n\
             Scene from a story about {}.\n\
             This is page {} of the book.\n\
             Page content: {}\n\n\
             IMPORTANT: Match the artistic style, character design, colors, and \
             overall look of the reference image exactly.",
            prompt.as_str(),
            page_number,
            page_text
        )
    } else {
        format!(
            "Children's book illustration style, colorful and friendly.\n\
             Scene from a story about {}.\n\
             This is page {} of the book.\n\
             Page content: {}",
            prompt.as_str(),
            page_number,
            page_text
        )
    }
}

/// Normalize delivered image bytes into a PNG-backed [`PageImage`].
///
/// PNG payloads pass through byte-identical, so the style reference handed
/// to later pages is exactly page 1's delivered bytes. Any other decodable
/// format (the endpoint occasionally returns JPEG) is re-encoded to PNG, so
/// every `page_NN.png` on disk really is a PNG.
pub(crate) fn decode_image(bytes: Vec<u8>) -> StorybookResult<PageImage> {
    let reader = image::ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()
        .map_err(|e| {
            ClientError::new(ClientErrorKind::ResponseParse(format!(
                "Unrecognized image data: {e}"
            )))
        })?;

    if reader.format() == Some(image::ImageFormat::Png) {
        let (width, height) = reader.into_dimensions().map_err(|e| {
            ClientError::new(ClientErrorKind::ResponseParse(format!(
                "Image decode failed: {e}"
            )))
        })?;
        return Ok(PageImage::new(bytes, width, height));
    }

    let decoded = reader.decode().map_err(|e| {
        ClientError::new(ClientErrorKind::ResponseParse(format!(
            "Image decode failed: {e}"
        )))
    })?;
    let (width, height) = (decoded.width(), decoded.height());
    let mut png = Vec::new();
    decoded
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| {
            ClientError::new(ClientErrorKind::ResponseParse(format!(
                "PNG re-encoding failed: {e}"
            )))
        })?;
    Ok(PageImage::new(png, width, height))
}

/// Render the fixed-size placeholder: neutral gray with a red banner strip.
fn placeholder(error: String) -> IllustrationOutcome {
    let mut canvas = image::RgbImage::from_pixel(
        PLACEHOLDER_SIZE,
        PLACEHOLDER_SIZE,
        image::Rgb([211, 211, 211]),
    );
    for y in 0..BANNER_HEIGHT {
        for x in 0..PLACEHOLDER_SIZE {
            canvas.put_pixel(x, y, image::Rgb([200, 60, 50]));
        }
    }

    let mut png = Vec::new();
    image::DynamicImage::ImageRgb8(canvas)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .expect("in-memory PNG encoding of the placeholder cannot fail");

    IllustrationOutcome {
        image: PageImage::new(png, PLACEHOLDER_SIZE, PLACEHOLDER_SIZE),
        source: IllustrationSource::Placeholder { error },
    }
}
