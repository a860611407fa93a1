//! OpenRouter client configuration.

use storybook_error::{ClientError, ClientErrorKind};

/// Default OpenRouter API base URL.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default model for script generation.
pub const DEFAULT_TEXT_MODEL: &str = "google/gemini-2.5-flash-preview-09-2025";

/// Default image-capable model for illustration generation.
pub const DEFAULT_IMAGE_MODEL: &str = "google/gemini-2.5-flash-image-preview";

/// Explicit client configuration.
///
/// Constructed once and passed in, rather than read from process-wide
/// globals, so tests can swap the base URL for a mock endpoint and the
/// binary can override model identifiers from the command line.
///
/// # Examples
///
/// ```
/// use storybook_client::OpenRouterConfig;
///
/// let config = OpenRouterConfig::new("sk-or-test")
///     .with_base_url("http://localhost:8080/api/v1");
/// assert_eq!(config.base_url(), "http://localhost:8080/api/v1");
/// ```
#[derive(Clone, derive_getters::Getters)]
pub struct OpenRouterConfig {
    /// API key sent as a bearer token
    api_key: String,
    /// API base URL (no trailing slash)
    base_url: String,
    /// Model identifier for script generation
    text_model: String,
    /// Model identifier for illustration generation
    image_model: String,
}

impl std::fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("base_url", &self.base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .finish_non_exhaustive()
    }
}

impl OpenRouterConfig {
    /// Create a configuration with the given API key and default endpoint
    /// and model identifiers.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }

    /// Read the API key from the `OPENROUTER_API_KEY` environment variable.
    ///
    /// The key's validity is not checked here; a bad key surfaces as an HTTP
    /// error on the first request.
    pub fn from_env() -> Result<Self, ClientError> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .map_err(|_| ClientError::new(ClientErrorKind::MissingApiKey))?;
        Ok(Self::new(api_key))
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the script-generation model.
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    /// Override the illustration-generation model.
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }
}
