//! Error types for the storybook pipeline.
//!
//! This crate provides the foundation error types used throughout the
//! storybook workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storybook_error::{ClientError, ClientErrorKind, StorybookResult};
//!
//! fn fetch_data() -> StorybookResult<String> {
//!     Err(ClientError::new(ClientErrorKind::ApiRequest(
//!         "Connection refused".to_string(),
//!     )))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod error;
mod pipeline;
mod prompt;
mod reader;
mod storage;

pub use client::{ClientError, ClientErrorKind};
pub use error::{StorybookError, StorybookErrorKind, StorybookResult};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use prompt::PromptError;
pub use reader::{ReaderError, ReaderErrorKind};
pub use storage::{StorageError, StorageErrorKind};
