//! The book generation orchestrator.
//!
//! Linear state sequence with no back-edges: validate prompt, generate the
//! script, generate ten illustrations in order, persist, report. The only
//! value carried across illustration calls is page 1's image, threaded as an
//! explicit argument rather than shared mutable state.

use crate::illustration::{IllustrationSource, generate_illustration};
use crate::persist::{BOOKS_DIR, save_book};
use crate::script::generate_script;
use std::path::{Path, PathBuf};
use storybook_core::{PAGE_COUNT, Page, PageImage, StoryPrompt};
use storybook_error::{PipelineError, PipelineErrorKind, StorybookError, StorybookResult};
use storybook_interface::{ProgressSink, StorybookDriver};
use tracing::warn;

/// Model identifiers for the two generation calls.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new, derive_getters::Getters)]
pub struct BookModels {
    /// Model for script generation
    text: String,
    /// Image-capable model for illustration generation
    image: String,
}

impl Default for BookModels {
    fn default() -> Self {
        Self::new(
            "google/gemini-2.5-flash-preview-09-2025".to_string(),
            "google/gemini-2.5-flash-image-preview".to_string(),
        )
    }
}

/// One gallery entry: a page and its illustration.
#[derive(Debug, Clone, derive_new::new, derive_getters::Getters)]
pub struct StoryboardEntry {
    /// The page position and text
    page: Page,
    /// The page illustration (real or placeholder)
    image: PageImage,
    /// Error message when the illustration degraded to a placeholder
    degraded: Option<String>,
}

/// How persistence ended.
///
/// A save failure does not fail the run; the storyboard is still returned
/// and the failure is carried here for the status message.
#[derive(Debug)]
pub enum SaveOutcome {
    /// The book folder was written.
    Saved(PathBuf),
    /// Persistence failed; generation results live only in memory.
    Failed(StorybookError),
}

impl SaveOutcome {
    /// The saved folder path, when persistence succeeded.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SaveOutcome::Saved(path) => Some(path),
            SaveOutcome::Failed(_) => None,
        }
    }
}

/// A completed run: the storyboard for display, the save outcome, and the
/// user-facing status message.
#[derive(Debug, derive_getters::Getters)]
pub struct BookRun {
    /// Ordered (image, caption) pairs for display
    storyboard: Vec<StoryboardEntry>,
    /// How persistence ended
    save: SaveOutcome,
    /// User-facing status text
    status: String,
    /// Error message when script generation degraded to error pages
    script_degraded: Option<String>,
}

/// The pipeline orchestrator, generic over the LLM backend.
///
/// # Example
///
/// ```rust,ignore
/// use storybook_book::BookPipeline;
/// use storybook_client::OpenRouterClient;
/// use storybook_interface::NullProgress;
///
/// let pipeline = BookPipeline::new(OpenRouterClient::from_env()?);
/// let run = pipeline.generate("a brave mouse", &mut NullProgress).await?;
/// println!("{}", run.status());
/// ```
#[derive(Debug)]
pub struct BookPipeline<D> {
    driver: D,
    models: BookModels,
    output_root: PathBuf,
}

impl<D: StorybookDriver> BookPipeline<D> {
    /// Create a pipeline with default models and output root.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            models: BookModels::default(),
            output_root: PathBuf::from(BOOKS_DIR),
        }
    }

    /// Override the model identifiers.
    pub fn with_models(mut self, models: BookModels) -> Self {
        self.models = models;
        self
    }

    /// Override the root directory books are saved under.
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    /// Run the whole pipeline for a prompt.
    ///
    /// Fails fast only on an empty prompt or an empty script; generation and
    /// persistence failures degrade into the returned [`BookRun`] instead.
    /// No folder is created when an error is returned.
    pub async fn generate(
        &self,
        prompt: &str,
        progress: &mut dyn ProgressSink,
    ) -> StorybookResult<BookRun> {
        let prompt = StoryPrompt::new(prompt)?;

        progress.update(0.0, "Generating story script...");
        let script = generate_script(&self.driver, self.models.text(), &prompt).await;
        if script.pages().is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::EmptyScript).into());
        }

        let mut storyboard = Vec::with_capacity(PAGE_COUNT);
        let mut images = Vec::with_capacity(PAGE_COUNT);
        let mut reference: Option<PageImage> = None;

        for (index, text) in script.pages().iter().enumerate() {
            let page_number = index + 1;
            let stage = if page_number == 1 {
                format!("Generating image for page {page_number}/{PAGE_COUNT} (establishing style)...")
            } else {
                format!("Generating image for page {page_number}/{PAGE_COUNT} (matching style)...")
            };
            progress.update(page_number as f32 / PAGE_COUNT as f32, &stage);

            let outcome = generate_illustration(
                &self.driver,
                self.models.image(),
                text,
                page_number,
                &prompt,
                reference.as_ref(),
            )
            .await;

            let degraded = match outcome.source() {
                IllustrationSource::Generated => None,
                IllustrationSource::Placeholder { error } => Some(error.clone()),
            };

            // Page 1's image becomes the style reference for every later
            // page, placeholder or not.
            if page_number == 1 {
                reference = Some(outcome.image().clone());
            }

            images.push(outcome.image().clone());
            storyboard.push(StoryboardEntry::new(
                Page::new(page_number, text.clone()),
                outcome.image().clone(),
                degraded,
            ));
        }

        progress.update(1.0, "Saving book to folder...");
        let (save, status) =
            match save_book(&self.output_root, &prompt, script.pages(), &images).await {
                Ok(path) => {
                    let status = format!(
                        "Successfully generated a {PAGE_COUNT}-page children's book!\n\n\
                         Prompt: {prompt}\n\nSaved to: {}",
                        path.display()
                    );
                    (SaveOutcome::Saved(path), status)
                }
                Err(e) => {
                    warn!(error = %e, "Book generation succeeded but saving failed");
                    let status = format!(
                        "Successfully generated a {PAGE_COUNT}-page children's book!\n\n\
                         Prompt: {prompt}\n\nWarning: could not save to folder: {e}"
                    );
                    (SaveOutcome::Failed(e), status)
                }
            };

        Ok(BookRun {
            storyboard,
            save,
            status,
            script_degraded: script.degraded().clone(),
        })
    }
}
