//! Relay configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_TEXT_API_BASE_URL: &str = "https://text.pollinations.ai";
pub const DEFAULT_IMAGE_API_BASE_URL: &str = "https://image.pollinations.ai";

/// Optional upstream timeouts. `None` waits indefinitely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: Option<u64>,
    pub connect_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub port: u16,
    pub text_base_url: String,
    pub image_base_url: String,
    pub timeouts: UpstreamTimeouts,
}

impl RelayConfig {
    /// Build typed relay config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3001
    /// - `TEXT_API_BASE_URL`: default Pollinations text endpoint
    /// - `IMAGE_API_BASE_URL`: default Pollinations image endpoint
    /// - `UPSTREAM_TIMEOUT_SECS`: unset means no request timeout
    /// - `UPSTREAM_CONNECT_TIMEOUT_SECS`: unset means no connect timeout
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RelayConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let text_base_url = base_url(lookup("TEXT_API_BASE_URL"), DEFAULT_TEXT_API_BASE_URL);
        let image_base_url = base_url(lookup("IMAGE_API_BASE_URL"), DEFAULT_IMAGE_API_BASE_URL);
        let timeouts = UpstreamTimeouts {
            request_secs: parse_secs(lookup("UPSTREAM_TIMEOUT_SECS")),
            connect_secs: parse_secs(lookup("UPSTREAM_CONNECT_TIMEOUT_SECS")),
        };

        Self { port, text_base_url, image_base_url, timeouts }
    }
}

fn base_url(raw: Option<String>, default: &str) -> String {
    raw.filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
        .trim()
        .trim_end_matches('/')
        .to_string()
}

fn parse_secs(raw: Option<String>) -> Option<u64> {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
