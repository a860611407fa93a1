//! Book generation pipeline.
//!
//! This crate sequences the whole run: one script-generation call, ten
//! strictly sequential illustration calls threading page 1's image through
//! as a style reference, folder persistence, and the read-side report over
//! a saved folder.
//!
//! Every generation step degrades rather than aborts: a failed script call
//! yields ten error pages, a failed illustration call yields a placeholder
//! bitmap, and a failed save downgrades to a warning in the run status. The
//! degraded state is tagged structurally on the outcome types so callers
//! never have to sniff message strings.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod illustration;
mod persist;
mod pipeline;
mod reader;
mod script;

pub use illustration::{
    IllustrationOutcome, IllustrationSource, PLACEHOLDER_SIZE, generate_illustration,
};
pub use persist::{BOOKS_DIR, MANIFEST_FILE, page_filename, save_book};
pub use pipeline::{BookModels, BookPipeline, BookRun, SaveOutcome, StoryboardEntry};
pub use reader::{PageReport, latest_book, load_manifest, page_reports, render_report};
pub use script::{SCRIPT_SYSTEM_INSTRUCTION, ScriptOutcome, generate_script, parse_script};
