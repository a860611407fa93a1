//! Story prompt validation errors.

/// Error raised when the story prompt fails validation.
///
/// The pipeline refuses to start on an empty or whitespace-only prompt,
/// so this error surfaces before any network call is made.
///
/// # Examples
///
/// ```
/// use storybook_error::PromptError;
///
/// let err = PromptError::empty();
/// assert!(format!("{}", err).contains("story prompt"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Prompt Error: {} at line {} in {}", message, line, file)]
pub struct PromptError {
    /// User-facing error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl PromptError {
    /// Create a new PromptError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// The empty-prompt error, with the user-facing message shown by the CLI.
    #[track_caller]
    pub fn empty() -> Self {
        Self::new("Please enter a story prompt; the story prompt cannot be empty")
    }
}
