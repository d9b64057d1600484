//! Content API connection settings.

use std::time::Duration;

use headless_core::ContentError;
use url::Url;

/// Where the content API lives and how long a single call may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentApiConfig {
    /// Base of the REST namespace, e.g. `https://example.com/wp-json/wp/v2`.
    pub base_url: String,
    /// Upper bound for every request. There are no retries.
    pub timeout: Duration,
}

impl ContentApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://thevibecode.io/wp-json/wp/v2";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("WORDPRESS_API_URL")
                .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(
                std::env::var("WORDPRESS_API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(Self::DEFAULT_TIMEOUT.as_secs()),
            ),
        }
    }

    /// The base URL with a trailing slash, ready for relative joins.
    pub fn endpoint_base(&self) -> Result<Url, ContentError> {
        let normalized = format!("{}/", self.base_url.trim_end_matches('/'));
        let url = Url::parse(&normalized).map_err(|e| {
            ContentError::InvalidConfig(format!("content API URL `{}`: {}", self.base_url, e))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ContentError::InvalidConfig(format!(
                "content API URL `{}` must be http(s), got `{}`",
                self.base_url, other
            ))),
        }
    }
}

impl Default for ContentApiConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ContentApiConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.base_url, "https://thevibecode.io/wp-json/wp/v2");
    }

    #[test]
    fn test_endpoint_base_adds_single_trailing_slash() {
        let base = ContentApiConfig::new("https://example.com/wp-json/wp/v2/")
            .endpoint_base()
            .unwrap();
        assert_eq!(base.as_str(), "https://example.com/wp-json/wp/v2/");
        assert_eq!(
            base.join("posts").unwrap().as_str(),
            "https://example.com/wp-json/wp/v2/posts"
        );
    }

    #[test]
    fn test_endpoint_base_rejects_garbage() {
        assert!(matches!(
            ContentApiConfig::new("not a url").endpoint_base(),
            Err(ContentError::InvalidConfig(_))
        ));
        assert!(matches!(
            ContentApiConfig::new("ftp://example.com").endpoint_base(),
            Err(ContentError::InvalidConfig(_))
        ));
    }
}
