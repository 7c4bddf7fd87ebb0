use async_trait::async_trait;

/// External chat-completion service used by the pipeline stages.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        system_prompt: &str,
    ) -> Result<String, GenerationError>;
}

/// Every variant is a stage-level recoverable fault: the pipeline absorbs it
/// with fallback content and continues.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("request timed out")]
    Timeout,
    #[error("rate limited")]
    RateLimited,
    #[error("empty response")]
    EmptyResponse,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
