//! Reading saved book folders back.
//!
//! The reader trusts `book_data.json` as the source of truth and only probes
//! the image files it names. A missing image degrades to a warning line in
//! the report; only a missing or unparseable manifest is an error.

use crate::persist::MANIFEST_FILE;
use std::path::{Path, PathBuf};
use storybook_core::BookManifest;
use storybook_error::{ReaderError, ReaderErrorKind, StorybookResult};
use tracing::warn;

/// The on-disk state of one page, derived from its manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct PageReport {
    /// 1-based page position from the manifest
    #[getter(copy)]
    page_number: usize,
    /// Page text from the manifest
    text: String,
    /// Image filename from the manifest
    image_file: String,
    /// Pixel dimensions, when the image file exists and decodes
    #[getter(copy)]
    dimensions: Option<(u32, u32)>,
}

/// Load and parse the manifest from a book folder.
///
/// Fails when the folder or manifest is missing, unreadable, or not valid
/// manifest JSON.
pub fn load_manifest(folder: &Path) -> StorybookResult<BookManifest> {
    if !folder.is_dir() {
        return Err(ReaderError::new(ReaderErrorKind::MissingFolder(
            folder.display().to_string(),
        ))
        .into());
    }
    let manifest_path = folder.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(ReaderError::new(ReaderErrorKind::MissingManifest(
            folder.display().to_string(),
        ))
        .into());
    }
    let raw = std::fs::read_to_string(&manifest_path)
        .map_err(|e| ReaderError::new(ReaderErrorKind::ManifestRead(e.to_string())))?;
    let manifest: BookManifest = serde_json::from_str(&raw)
        .map_err(|e| ReaderError::new(ReaderErrorKind::ManifestParse(e.to_string())))?;
    Ok(manifest)
}

/// Probe each page's image file and fold the result into per-page reports.
///
/// A missing or undecodable image never fails the call; the report's
/// `dimensions` is simply `None`.
pub fn page_reports(folder: &Path, manifest: &BookManifest) -> Vec<PageReport> {
    manifest
        .pages()
        .iter()
        .map(|entry| {
            let path = folder.join(entry.image_file());
            let dimensions = image::image_dimensions(&path)
                .map_err(|e| {
                    warn!(path = %path.display(), error = %e, "Could not read page image");
                    e
                })
                .ok();
            PageReport {
                page_number: entry.page_number(),
                text: entry.text().clone(),
                image_file: entry.image_file().clone(),
                dimensions,
            }
        })
        .collect()
}

/// Render the human-readable book report.
///
/// # Examples
///
/// ```
/// use storybook_book::render_report;
/// use storybook_core::{BookManifest, PageEntry};
///
/// let manifest = BookManifest::new(
///     "a brave mouse",
///     "2025-01-01T00:00:00+00:00",
///     vec![PageEntry::new(1, "The mouse set out.", "page_01.png")],
/// );
/// let report = render_report(&manifest, &[]);
/// assert!(report.contains("Prompt: a brave mouse"));
/// assert!(report.contains("Total Pages: 1"));
/// ```
pub fn render_report(manifest: &BookManifest, reports: &[PageReport]) -> String {
    let banner = "=".repeat(80);
    let mut out = String::new();
    out.push_str(&format!("\n{banner}\n"));
    out.push_str("CHILDREN'S BOOK\n");
    out.push_str(&format!("{banner}\n"));
    out.push_str(&format!("Prompt: {}\n", manifest.prompt()));
    out.push_str(&format!("Generated: {}\n", manifest.generated_at()));
    out.push_str(&format!("Total Pages: {}\n", manifest.pages().len()));
    out.push_str(&format!("{banner}\n"));

    for report in reports {
        out.push_str(&format!("\nPage {}\n", report.page_number()));
        out.push_str(&format!("{}\n", "-".repeat(40)));
        out.push_str(&format!("Text: {}\n", report.text()));
        out.push_str(&format!("Image: {}\n", report.image_file()));
        match report.dimensions() {
            Some((width, height)) => {
                out.push_str(&format!("Image size: {width}x{height} pixels\n"));
            }
            None => {
                out.push_str(&format!(
                    "Warning: image file not found: {}\n",
                    report.image_file()
                ));
            }
        }
    }

    out.push_str(&format!("\n{banner}\n"));
    out.push_str("Book data loaded successfully!\n");
    out.push_str(&format!("{banner}\n"));
    out
}

/// The lexicographically last book folder under `root`, if any.
///
/// Folder names embed a `YYYYMMDD_HHMMSS` timestamp, so lexicographic order
/// is chronological order.
pub fn latest_book(root: &Path) -> Option<PathBuf> {
    let mut folders: Vec<PathBuf> = std::fs::read_dir(root)
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    folders.sort();
    folders.pop()
}
