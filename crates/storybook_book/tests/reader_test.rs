//! Tests for reading saved book folders.

mod common;

use common::png_bytes;
use std::path::Path;
use storybook_book::{
    MANIFEST_FILE, latest_book, load_manifest, page_filename, page_reports, render_report,
    save_book,
};
use storybook_core::{PageImage, StoryPrompt};

async fn saved_book(root: &Path) -> std::path::PathBuf {
    let prompt = StoryPrompt::new("a brave mouse").unwrap();
    let pages: Vec<String> = (1..=10).map(|n| format!("Sentence number {n}.")).collect();
    let images: Vec<PageImage> = (1..=10)
        .map(|_| PageImage::new(png_bytes(20, 30, 128), 20, 30))
        .collect();
    save_book(root, &prompt, &pages, &images).await.unwrap()
}

#[tokio::test]
async fn loads_manifest_from_saved_folder() {
    let root = tempfile::tempdir().unwrap();
    let folder = saved_book(root.path()).await;

    let manifest = load_manifest(&folder).unwrap();
    assert_eq!(manifest.prompt(), "a brave mouse");
    assert_eq!(manifest.pages().len(), 10);
}

#[test]
fn missing_folder_is_an_error() {
    let err = load_manifest(Path::new("no/such/folder")).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[tokio::test]
async fn folder_without_manifest_is_an_error() {
    let root = tempfile::tempdir().unwrap();
    let err = load_manifest(root.path()).unwrap_err();
    assert!(err.to_string().contains("Could not find book_data.json"));
}

#[tokio::test]
async fn corrupt_manifest_is_a_parse_error() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join(MANIFEST_FILE), b"{ not json").unwrap();
    let err = load_manifest(root.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse manifest"));
}

#[tokio::test]
async fn reports_carry_pixel_dimensions() {
    let root = tempfile::tempdir().unwrap();
    let folder = saved_book(root.path()).await;

    let manifest = load_manifest(&folder).unwrap();
    let reports = page_reports(&folder, &manifest);
    assert_eq!(reports.len(), 10);
    for report in &reports {
        assert_eq!(report.dimensions(), Some((20, 30)));
    }
}

#[tokio::test]
async fn missing_image_degrades_to_a_warning_in_the_report() {
    let root = tempfile::tempdir().unwrap();
    let folder = saved_book(root.path()).await;
    std::fs::remove_file(folder.join(page_filename(3))).unwrap();

    let manifest = load_manifest(&folder).unwrap();
    let reports = page_reports(&folder, &manifest);
    assert_eq!(reports[2].dimensions(), None);
    assert_eq!(reports[0].dimensions(), Some((20, 30)));

    let report = render_report(&manifest, &reports);
    assert!(report.contains("Warning: image file not found: page_03.png"));
    assert!(report.contains("Image size: 20x30 pixels"));
}

#[tokio::test]
async fn report_lists_every_page_and_the_header() {
    let root = tempfile::tempdir().unwrap();
    let folder = saved_book(root.path()).await;

    let manifest = load_manifest(&folder).unwrap();
    let reports = page_reports(&folder, &manifest);
    let report = render_report(&manifest, &reports);

    assert!(report.contains("CHILDREN'S BOOK"));
    assert!(report.contains("Prompt: a brave mouse"));
    assert!(report.contains("Total Pages: 10"));
    for n in 1..=10 {
        assert!(report.contains(&format!("\nPage {n}\n")));
    }
    assert!(report.contains("Book data loaded successfully!"));
}

#[test]
fn latest_book_picks_the_lexicographically_last_folder() {
    let root = tempfile::tempdir().unwrap();
    for name in [
        "book_20250101_120000",
        "book_20250601_080000",
        "book_20250315_233000",
    ] {
        std::fs::create_dir(root.path().join(name)).unwrap();
    }
    // Stray files are ignored.
    std::fs::write(root.path().join("notes.txt"), b"x").unwrap();

    let latest = latest_book(root.path()).unwrap();
    assert_eq!(
        latest.file_name().unwrap().to_str().unwrap(),
        "book_20250601_080000"
    );
}

#[test]
fn latest_book_is_none_for_missing_or_empty_root() {
    assert!(latest_book(Path::new("no/such/root")).is_none());
    let root = tempfile::tempdir().unwrap();
    assert!(latest_book(root.path()).is_none());
}
