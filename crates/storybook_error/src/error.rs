//! Top-level error wrapper types.

use crate::{ClientError, PipelineError, PromptError, ReaderError, StorageError};

/// This is the foundation error enum for the storybook workspace.
///
/// # Examples
///
/// ```
/// use storybook_error::{StorybookError, ClientError, ClientErrorKind};
///
/// let client_err = ClientError::new(ClientErrorKind::MissingImages);
/// let err: StorybookError = client_err.into();
/// assert!(format!("{}", err).contains("No images"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StorybookErrorKind {
    /// Story prompt validation error
    #[from(PromptError)]
    Prompt(PromptError),
    /// OpenRouter client error
    #[from(ClientError)]
    Client(ClientError),
    /// Book persistence error
    #[from(StorageError)]
    Storage(StorageError),
    /// Book reader error
    #[from(ReaderError)]
    Reader(ReaderError),
    /// Pipeline orchestration error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Storybook error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storybook_error::{StorybookResult, PromptError};
///
/// fn might_fail() -> StorybookResult<()> {
///     Err(PromptError::empty())?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storybook Error: {}", _0)]
pub struct StorybookError(Box<StorybookErrorKind>);

impl StorybookError {
    /// Create a new error from a kind.
    pub fn new(kind: StorybookErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorybookErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StorybookErrorKind
impl<T> From<T> for StorybookError
where
    T: Into<StorybookErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for storybook operations.
///
/// # Examples
///
/// ```
/// use storybook_error::{StorybookResult, ReaderError, ReaderErrorKind};
///
/// fn fetch_data() -> StorybookResult<String> {
///     Err(ReaderError::new(ReaderErrorKind::MissingFolder(
///         "books/missing".to_string(),
///     )))?
/// }
/// ```
pub type StorybookResult<T> = std::result::Result<T, StorybookError>;
