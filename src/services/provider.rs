//! Text generation seam.
//!
//! The relay only needs "prompt in, text out". Concrete backends live in
//! sibling modules; tests plug in their own implementations.

use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a text generation backend.
///
/// The variants only matter for server-side logs. Clients always see the
/// same generic message.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP client setup failed: {0}")]
    Client(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("rate limited by provider")]
    RateLimited,

    #[error("provider returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("generation blocked: {0}")]
    Blocked(String),

    #[error("provider returned no text")]
    EmptyResponse,

    #[error("failed to decode provider response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Turn a prompt into generated text.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
