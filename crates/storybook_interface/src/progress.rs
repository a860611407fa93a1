//! Progress reporting side channel.

/// Observability sink for pipeline progress.
///
/// The pipeline emits a fraction in `0.0..=1.0` plus a human-readable stage
/// description between steps. Reporting has no effect on control flow; the
/// sink exists so a presentation layer can show what the pipeline is doing
/// while it blocks on network calls.
pub trait ProgressSink {
    /// Report the current completion fraction and stage description.
    fn update(&mut self, fraction: f32, stage: &str);
}

/// A sink that discards all progress updates.
///
/// # Examples
///
/// ```
/// use storybook_interface::{NullProgress, ProgressSink};
///
/// let mut sink = NullProgress;
/// sink.update(0.5, "halfway there");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn update(&mut self, _fraction: f32, _stage: &str) {}
}
