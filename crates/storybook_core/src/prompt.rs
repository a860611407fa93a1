//! Story prompt validation.

use serde::{Deserialize, Serialize};
use storybook_error::PromptError;

/// A validated, non-empty story prompt.
///
/// The constructor trims and rejects empty input, so a `StoryPrompt` in hand
/// is the guarantee the pipeline relies on before making any network call.
///
/// # Examples
///
/// ```
/// use storybook_core::StoryPrompt;
///
/// let prompt = StoryPrompt::new("a brave mouse").unwrap();
/// assert_eq!(prompt.as_str(), "a brave mouse");
///
/// assert!(StoryPrompt::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub struct StoryPrompt(String);

impl StoryPrompt {
    /// Validate and construct a story prompt.
    ///
    /// Leading and trailing whitespace is preserved in the stored prompt;
    /// only the emptiness check uses the trimmed form.
    pub fn new(prompt: impl Into<String>) -> Result<Self, PromptError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(PromptError::empty());
        }
        Ok(Self(prompt))
    }

    /// The prompt text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
