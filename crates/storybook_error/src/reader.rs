//! Book reader error types.

/// Specific error conditions for reading a saved book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ReaderErrorKind {
    /// The book folder does not exist
    #[display("Folder '{}' does not exist", _0)]
    MissingFolder(String),
    /// book_data.json is missing from the folder
    #[display("Could not find book_data.json in {}", _0)]
    MissingManifest(String),
    /// Failed to read the manifest file
    #[display("Failed to read manifest: {}", _0)]
    ManifestRead(String),
    /// Failed to parse the manifest JSON
    #[display("Failed to parse manifest: {}", _0)]
    ManifestParse(String),
}

/// Reader error with location tracking.
///
/// # Examples
///
/// ```
/// use storybook_error::{ReaderError, ReaderErrorKind};
///
/// let err = ReaderError::new(ReaderErrorKind::MissingFolder("books/missing".to_string()));
/// assert!(format!("{}", err).contains("does not exist"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Reader Error: {} at line {} in {}", kind, line, file)]
pub struct ReaderError {
    /// The kind of error that occurred
    pub kind: ReaderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ReaderError {
    /// Create a new reader error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ReaderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
