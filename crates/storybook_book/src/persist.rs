//! Book folder persistence.

use chrono::Local;
use std::path::{Path, PathBuf};
use storybook_core::{BookManifest, PageEntry, PageImage, StoryPrompt};
use storybook_error::{StorageError, StorageErrorKind, StorybookResult};
use tracing::{info, instrument};

/// Default root directory for saved books.
pub const BOOKS_DIR: &str = "generated_books";

/// Manifest filename inside each book folder.
pub const MANIFEST_FILE: &str = "book_data.json";

/// Filename for a page's image: 2-digit, 1-indexed.
///
/// # Examples
///
/// ```
/// use storybook_book::page_filename;
///
/// assert_eq!(page_filename(1), "page_01.png");
/// assert_eq!(page_filename(10), "page_10.png");
/// ```
pub fn page_filename(page_number: usize) -> String {
    format!("page_{:02}.png", page_number)
}

/// Save a generated book under `root` as a timestamped folder.
///
/// Writes one `page_NN.png` per image in positional order, then the
/// `book_data.json` manifest. The folder name uses the invocation-time local
/// timestamp; directory creation is exist-ok, so a second save within the
/// same second merges into (and overwrites files in) the same folder.
///
/// There is no partial-failure recovery: the first write error propagates
/// and whatever was already written stays on disk.
#[instrument(skip(prompt, pages, images), fields(pages = pages.len()))]
pub async fn save_book(
    root: &Path,
    prompt: &StoryPrompt,
    pages: &[String],
    images: &[PageImage],
) -> StorybookResult<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let folder = root.join(format!("book_{timestamp}"));

    tokio::fs::create_dir_all(&folder).await.map_err(|e| {
        StorageError::new(StorageErrorKind::DirectoryCreation(format!(
            "{}: {}",
            folder.display(),
            e
        )))
    })?;

    let mut entries = Vec::with_capacity(pages.len());
    for (index, (text, image)) in pages.iter().zip(images).enumerate() {
        let page_number = index + 1;
        let filename = page_filename(page_number);
        let path = folder.join(&filename);
        tokio::fs::write(&path, image.bytes()).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        entries.push(PageEntry::new(page_number, text.clone(), filename));
    }

    let manifest = BookManifest::new(prompt.as_str(), Local::now().to_rfc3339(), entries);
    let json = serde_json::to_string_pretty(&manifest)
        .map_err(|e| StorageError::new(StorageErrorKind::ManifestSerialize(e.to_string())))?;
    let manifest_path = folder.join(MANIFEST_FILE);
    tokio::fs::write(&manifest_path, json).await.map_err(|e| {
        StorageError::new(StorageErrorKind::ManifestWrite(format!(
            "{}: {}",
            manifest_path.display(),
            e
        )))
    })?;

    info!(path = %folder.display(), pages = pages.len(), "Saved book folder");
    Ok(folder)
}
