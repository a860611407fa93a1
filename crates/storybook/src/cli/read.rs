//! The `read` subcommand.

use std::path::PathBuf;
use storybook_book::{BOOKS_DIR, latest_book, load_manifest, page_reports, render_report};

/// Load a saved book folder and print its report.
///
/// With no folder argument, falls back to the most recently generated book
/// under `generated_books/`.
pub fn run_read(folder: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let folder = match folder {
        Some(folder) => folder,
        None => {
            let root = PathBuf::from(BOOKS_DIR);
            let latest = latest_book(&root)
                .ok_or_else(|| format!("No generated books found in {}/", root.display()))?;
            println!("Reading most recent book: {}", latest.display());
            latest
        }
    };

    let manifest = load_manifest(&folder)?;
    let reports = page_reports(&folder, &manifest);
    print!("{}", render_report(&manifest, &reports));
    Ok(())
}
