//! Page types for the ten-page book.

use serde::{Deserialize, Serialize};

/// Number of pages in a generated book.
///
/// The script generator always returns exactly this many page texts, and the
/// illustration loop runs exactly this many times.
pub const PAGE_COUNT: usize = 10;

/// A single page of the book: its 1-based position and its text.
///
/// # Examples
///
/// ```
/// use storybook_core::Page;
///
/// let page = Page::new(1, "The mouse set out at dawn.");
/// assert_eq!(page.number(), 1);
/// assert_eq!(page.text(), "The mouse set out at dawn.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
    number: usize,
    text: String,
}

impl Page {
    /// Create a page at the given 1-based position.
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// 1-based page position.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Page text (one to two sentences).
    pub fn text(&self) -> &str {
        &self.text
    }
}
