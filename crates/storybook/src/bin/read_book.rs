//! Standalone reader for saved book folders.
//!
//! Usage: `read_book <folder>`. With no argument it reads the most recent
//! book under `generated_books/` but still exits nonzero, so scripts can
//! tell an explicit read from the fallback.

use std::path::PathBuf;
use std::process::ExitCode;
use storybook::{BOOKS_DIR, latest_book, load_manifest, page_reports, render_report};

fn read_book(folder: &PathBuf) -> Result<(), storybook::StorybookError> {
    let manifest = load_manifest(folder)?;
    let reports = page_reports(folder, &manifest);
    print!("{}", render_report(&manifest, &reports));
    Ok(())
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);

    let Some(folder) = args.next() else {
        eprintln!("Usage: read_book <book_folder>");
        let root = PathBuf::from(BOOKS_DIR);
        match latest_book(&root) {
            Some(latest) => {
                eprintln!("Reading most recent book: {}\n", latest.display());
                if let Err(e) = read_book(&latest) {
                    eprintln!("{e}");
                }
            }
            None => {
                eprintln!("No generated books found in {}/", root.display());
            }
        }
        return ExitCode::FAILURE;
    };

    match read_book(&PathBuf::from(folder)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
