//! The durable book manifest.
//!
//! `book_data.json` is the source of truth for a saved book. Field names are
//! part of the on-disk contract and must not change.

use serde::{Deserialize, Serialize};

/// One page entry in the manifest.
///
/// # Examples
///
/// ```
/// use storybook_core::PageEntry;
///
/// let entry = PageEntry::new(1, "The mouse set out at dawn.", "page_01.png");
/// assert_eq!(entry.page_number(), 1);
/// assert_eq!(entry.image_file(), "page_01.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PageEntry {
    /// 1-based page position
    #[getter(copy)]
    page_number: usize,
    /// Page text
    text: String,
    /// Image filename relative to the book folder
    image_file: String,
}

impl PageEntry {
    /// Create a manifest entry for one page.
    pub fn new(page_number: usize, text: impl Into<String>, image_file: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
            image_file: image_file.into(),
        }
    }
}

/// The manifest written as `book_data.json` in each book folder.
///
/// Images are referenced by filename, never embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct BookManifest {
    /// The story prompt the book was generated from
    prompt: String,
    /// ISO-8601 timestamp captured at save time
    generated_at: String,
    /// Page entries in page order
    pages: Vec<PageEntry>,
}

impl BookManifest {
    /// Assemble a manifest from its parts.
    pub fn new(
        prompt: impl Into<String>,
        generated_at: impl Into<String>,
        pages: Vec<PageEntry>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            generated_at: generated_at.into(),
            pages,
        }
    }
}
