//! OpenRouter API client implementation.

use crate::config::OpenRouterConfig;
use crate::conversion::{parse_data_url, to_chat_request};
use crate::dto::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::Client;
use storybook_core::{GenerateRequest, GenerateResponse, Output};
use storybook_error::{ClientError, ClientErrorKind, StorybookResult};
use storybook_interface::StorybookDriver;
use tracing::{debug, instrument};

/// Client for the OpenRouter chat-completions API.
///
/// Serves both the text model and the image-capable model; the pipeline
/// selects between them per request via `GenerateRequest.model`. Generated
/// images delivered as data URLs are decoded inline; remote URLs are fetched
/// through the same HTTP client.
#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    config: OpenRouterConfig,
}

impl std::fmt::Debug for OpenRouterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterClient")
            .field("base_url", &self.config.base_url())
            .field("text_model", &self.config.text_model())
            .field("image_model", &self.config.image_model())
            .finish_non_exhaustive()
    }
}

impl OpenRouterClient {
    /// Create a client from an explicit configuration.
    pub fn new(config: OpenRouterConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Create a client with the API key from `OPENROUTER_API_KEY`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use storybook_client::OpenRouterClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = OpenRouterClient::from_env()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_env() -> StorybookResult<Self> {
        Ok(Self::new(OpenRouterConfig::from_env()?))
    }

    /// The client configuration.
    pub fn config(&self) -> &OpenRouterConfig {
        &self.config
    }

    /// Send a chat-completions request and parse the response envelope.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError> {
        let url = format!("{}/chat/completions", self.config.base_url());
        debug!(url = %url, model = %request.model(), "Sending OpenRouter API request");

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key()),
            )
            .json(request)
            .send()
            .await
            .map_err(|e| {
                ClientError::new(ClientErrorKind::ApiRequest(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::new(ClientErrorKind::Http {
                status_code,
                message,
            }));
        }

        response.json().await.map_err(|e| {
            ClientError::new(ClientErrorKind::ResponseParse(e.to_string()))
        })
    }

    /// Resolve one generated-image URL into an image output.
    ///
    /// Data URLs decode locally; anything else is fetched as a remote URL.
    async fn resolve_image(&self, url: &str) -> Result<Output, ClientError> {
        if let Some((mime, payload)) = parse_data_url(url) {
            let data = STANDARD
                .decode(payload)
                .map_err(|e| ClientError::new(ClientErrorKind::Base64Decode(e.to_string())))?;
            return Ok(Output::Image { mime, data });
        }

        debug!(url = %url, "Fetching remote generated image");
        let response = self.client.get(url).send().await.map_err(|e| {
            ClientError::new(ClientErrorKind::ImageFetch {
                url: url.to_string(),
                message: e.to_string(),
            })
        })?;
        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let data = response
            .bytes()
            .await
            .map_err(|e| {
                ClientError::new(ClientErrorKind::ImageFetch {
                    url: url.to_string(),
                    message: e.to_string(),
                })
            })?
            .to_vec();
        Ok(Output::Image { mime, data })
    }

    /// Internal generate method that returns client-specific errors.
    async fn generate_internal(
        &self,
        req: &GenerateRequest,
    ) -> Result<GenerateResponse, ClientError> {
        let request = to_chat_request(req, self.config.text_model())?;
        let response = self.chat(&request).await?;

        let message = response
            .choices()
            .first()
            .map(|choice| choice.message())
            .ok_or_else(|| {
                ClientError::new(ClientErrorKind::ResponseParse(
                    "Response carried no choices".to_string(),
                ))
            })?;

        let mut outputs = Vec::new();
        if let Some(content) = message.content() {
            outputs.push(Output::Text(content.clone()));
        }
        // Only the first generated image is consumed per call.
        if let Some(url) = message.first_image_url() {
            outputs.push(self.resolve_image(url).await?);
        }

        Ok(GenerateResponse { outputs })
    }
}

#[async_trait]
impl StorybookDriver for OpenRouterClient {
    #[instrument(skip(self, req))]
    async fn generate(&self, req: &GenerateRequest) -> StorybookResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "openrouter"
    }

    fn model_name(&self) -> &str {
        self.config.text_model()
    }
}
