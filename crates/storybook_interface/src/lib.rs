//! Trait definitions for LLM backends and pipeline observability.
//!
//! The pipeline is generic over [`StorybookDriver`], so tests can run the
//! whole book generation against a mock backend, and the binary can plug in
//! the OpenRouter client without the pipeline knowing which provider it is
//! talking to.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod progress;
mod traits;

pub use progress::{NullProgress, ProgressSink};
pub use traits::StorybookDriver;
