use async_trait::async_trait;

/// Content assist trait - remote text-rewriting backends.
///
/// Implementations make exactly one attempt; retry and fallback policy
/// belongs to [`crate::assist::AssistService`].
#[async_trait]
pub trait ContentAssist: Send + Sync {
    /// Rewrite a draft post into something friendlier and more inviting.
    async fn enhance(&self, text: &str) -> Result<String, AssistError>;
}

/// Content assist errors.
#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Backend returned an error: {0}")]
    Backend(String),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Backend returned no text")]
    Empty,
}
