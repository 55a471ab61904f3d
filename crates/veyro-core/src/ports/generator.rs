use async_trait::async_trait;

use crate::domain::{BrandProfile, StrategyDocument};

/// Generation collaborator - one call from brand intake to a strategy
/// document. Implementations own the provider SDK, prompt, and response
/// shaping (see [`StrategyDocument::from_provider_text`] for the shared
/// fallback); this crate only defines the seam.
#[async_trait]
pub trait RoadmapGenerator: Send + Sync {
    async fn generate(&self, brand: &BrandProfile) -> Result<StrategyDocument, GeneratorError>;
}

/// Failures of the generation collaborator. None of these are retried;
/// each is terminal for the user action that triggered the call.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Invalid API key format")]
    InvalidKeyFormat,

    #[error("Invalid API key")]
    InvalidKey,

    #[error("Permission denied for the configured API key")]
    PermissionDenied,

    #[error("API quota exceeded")]
    QuotaExceeded,

    #[error("Model unavailable")]
    ModelUnavailable,

    #[error("Empty response from provider")]
    EmptyResponse,

    #[error("Generation failed: {0}")]
    Other(String),
}
