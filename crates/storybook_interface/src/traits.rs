//! Driver trait for LLM backends.

use async_trait::async_trait;
use storybook_core::{GenerateRequest, GenerateResponse};
use storybook_error::StorybookResult;

/// Core trait that all LLM backends must implement.
///
/// This provides the minimal interface for synchronous generation; the same
/// call shape serves both the text model (script generation) and the
/// image-capable model (illustration generation), distinguished by
/// `GenerateRequest.model` and `GenerateRequest.modalities`.
#[async_trait]
pub trait StorybookDriver: Send + Sync {
    /// Generate model output given a multimodal request.
    async fn generate(&self, req: &GenerateRequest) -> StorybookResult<GenerateResponse>;

    /// Provider name (e.g., "openrouter").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when `GenerateRequest.model` is None.
    fn model_name(&self) -> &str;
}
