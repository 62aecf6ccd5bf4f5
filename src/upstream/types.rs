//! Upstream types: errors and provider-neutral generator traits.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by upstream generation calls.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The HTTP request to the upstream failed before a status was received.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The upstream returned a non-success HTTP status.
    #[error("Pollinations API error: {status}")]
    Status { status: u16, body: String },

    /// A configured base URL cannot be used to build request URLs.
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl UpstreamError {
    /// Response body of a non-success upstream reply.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

// =============================================================================
// GENERATOR TRAITS
// =============================================================================

/// Text generation: prompt in, raw model text out.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] on transport failure or a non-2xx status.
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError>;
}

/// An image the upstream will render at `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: String,
    pub revised_prompt: String,
}

/// Image generation: prompt in, image location out.
#[async_trait::async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Resolve an image for `prompt`. Implementations need not verify that
    /// the returned URL resolves.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] if the image location cannot be produced.
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, UpstreamError>;
}
