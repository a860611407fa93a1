//! Page image type.

/// An encoded page illustration.
///
/// Always holds PNG bytes plus the decoded pixel dimensions. PNG deliveries
/// from the image endpoint are kept exactly as received, so the style
/// reference handed to later pages is bit-identical to page 1's delivered
/// image; deliveries in other formats are re-encoded to PNG before they
/// reach this type.
///
/// # Examples
///
/// ```
/// use storybook_core::PageImage;
///
/// let image = PageImage::new(vec![0x89, 0x50, 0x4E, 0x47], 512, 512);
/// assert_eq!(image.width(), 512);
/// assert_eq!(image.bytes().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct PageImage {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl PageImage {
    /// Encoded image bytes (PNG).
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}
