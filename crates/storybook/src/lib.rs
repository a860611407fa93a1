//! Storybook facade crate.
//!
//! Re-exports the public surface of the workspace crates behind a single
//! import, and hosts the CLI used by the `storybook` and `read_book`
//! binaries.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cli;

pub use cli::{Cli, Commands, ConsoleProgress, run_generate, run_read};

pub use storybook_book::{
    BOOKS_DIR, BookModels, BookPipeline, BookRun, IllustrationOutcome, IllustrationSource,
    MANIFEST_FILE, PLACEHOLDER_SIZE, PageReport, SCRIPT_SYSTEM_INSTRUCTION, SaveOutcome,
    ScriptOutcome, StoryboardEntry, generate_illustration, generate_script, latest_book,
    load_manifest, page_filename, page_reports, parse_script, render_report, save_book,
};
pub use storybook_client::{
    DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, OpenRouterClient, OpenRouterConfig,
};
pub use storybook_core::{
    BookManifest, GenerateRequest, GenerateResponse, Input, MediaSource, Message, Modality, Output,
    PAGE_COUNT, Page, PageEntry, PageImage, Role, StoryPrompt,
};
pub use storybook_error::{StorybookError, StorybookErrorKind, StorybookResult};
pub use storybook_interface::{NullProgress, ProgressSink, StorybookDriver};
