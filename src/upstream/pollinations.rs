//! Pollinations clients for text and image generation.

use std::time::Duration;

use reqwest::header::ACCEPT;
use tracing::debug;

use super::types::{GeneratedImage, ImageGenerator, TextGenerator, UpstreamError};
use crate::config::UpstreamTimeouts;

pub const IMAGE_WIDTH: u32 = 1024;
pub const IMAGE_HEIGHT: u32 = 1024;

// =============================================================================
// TEXT
// =============================================================================

pub struct PollinationsText {
    http: reqwest::Client,
    base_url: String,
}

impl PollinationsText {
    /// Build a text client against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an http(s) URL or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, timeouts: UpstreamTimeouts) -> Result<Self, UpstreamError> {
        let base_url = checked_base_url(base_url)?;
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = timeouts.connect_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    fn prompt_url(&self, prompt: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(prompt))
    }
}

#[async_trait::async_trait]
impl TextGenerator for PollinationsText {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        let url = self.prompt_url(prompt);
        debug!(prompt_len = prompt.len(), "pollinations: text request");
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "text/plain")
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(UpstreamError::Status { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

// =============================================================================
// IMAGE
// =============================================================================

/// Builds Pollinations image URLs. The upstream renders the image when the
/// URL is first fetched, so no request is made here.
pub struct PollinationsImage {
    base_url: String,
}

impl PollinationsImage {
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, UpstreamError> {
        Ok(Self { base_url: checked_base_url(base_url)? })
    }

    #[must_use]
    pub fn image_url(&self, prompt: &str) -> String {
        format!(
            "{}/prompt/{}?width={IMAGE_WIDTH}&height={IMAGE_HEIGHT}&nologo=true",
            self.base_url,
            urlencoding::encode(prompt)
        )
    }
}

#[async_trait::async_trait]
impl ImageGenerator for PollinationsImage {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, UpstreamError> {
        Ok(GeneratedImage { url: self.image_url(prompt), revised_prompt: prompt.to_owned() })
    }
}

fn checked_base_url(raw: &str) -> Result<String, UpstreamError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(UpstreamError::InvalidUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[path = "pollinations_test.rs"]
mod tests;
