//! OpenRouter client error types.

/// Specific error conditions for the OpenRouter client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ClientErrorKind {
    /// API key not found in environment
    #[display("OPENROUTER_API_KEY environment variable not set")]
    MissingApiKey,
    /// API request failed in transport
    #[display("OpenRouter API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body could not be parsed
    #[display("Failed to parse response: {}", _0)]
    ResponseParse(String),
    /// Response carried no generated images
    #[display("No images in response")]
    MissingImages,
    /// Base64 decoding of an inline image failed
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
    /// Fetching a remote image URL failed
    #[display("Failed to fetch image from {}: {}", url, message)]
    ImageFetch {
        /// The remote URL
        url: String,
        /// Error message
        message: String,
    },
}

/// Client error with source location tracking.
///
/// # Examples
///
/// ```
/// use storybook_error::{ClientError, ClientErrorKind};
///
/// let err = ClientError::new(ClientErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("OPENROUTER_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Client Error: {} at line {} in {}", kind, line, file)]
pub struct ClientError {
    /// The kind of error that occurred
    pub kind: ClientErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ClientError {
    /// Create a new ClientError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ClientErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
