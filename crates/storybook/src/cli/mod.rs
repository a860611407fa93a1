//! Command-line interface for the storybook binary.

mod generate;
mod read;

pub use generate::run_generate;
pub use read::run_read;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storybook_interface::ProgressSink;

/// Storybook CLI - generate and read illustrated children's books.
#[derive(Parser)]
#[command(name = "storybook")]
#[command(about = "Generate ten-page illustrated children's books", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a book from a story prompt
    Generate {
        /// The story prompt (e.g. "a brave little mouse")
        #[arg(short, long)]
        prompt: String,

        /// Override the script-generation model
        #[arg(long)]
        text_model: Option<String>,

        /// Override the illustration-generation model
        #[arg(long)]
        image_model: Option<String>,

        /// Root directory books are saved under
        #[arg(short, long, default_value = storybook_book::BOOKS_DIR)]
        output: PathBuf,

        /// Show debug-level progress
        #[arg(short, long)]
        verbose: bool,
    },

    /// Read a saved book folder and print its report
    Read {
        /// Book folder; defaults to the most recent under generated_books/
        folder: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }
}

/// Progress sink that streams stage lines to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn update(&mut self, fraction: f32, stage: &str) {
        println!("[{:>3.0}%] {stage}", fraction * 100.0);
    }
}
