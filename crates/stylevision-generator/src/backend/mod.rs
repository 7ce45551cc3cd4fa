pub mod chat;
pub mod mock;

use async_trait::async_trait;
use stylevision_core::GenerationOutcome;
use stylevision_prompts::DescriptionRequest;

/// A service that turns product attributes into marketing copy.
///
/// Implementations make at most one outbound call per `generate` and never
/// retry. Every failure comes back as [`GenerationOutcome::Failed`] so the
/// caller can decide what the user sees.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Human-readable backend name for logging and health reporting.
    fn name(&self) -> &str;

    /// Optional model hint for logging/display purposes.
    fn model_hint(&self) -> Option<&str> {
        None
    }

    async fn generate(&self, request: &DescriptionRequest) -> GenerationOutcome;
}
