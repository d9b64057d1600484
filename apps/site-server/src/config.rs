//! Application configuration loaded from environment variables.

use std::env;

use headless_core::seo::SiteConfig;
use headless_infra::ContentApiConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub content_api: ContentApiConfig,
    pub site: SiteConfig,
    /// Whether `WORDPRESS_API_URL` was set rather than defaulted.
    pub content_api_explicit: bool,
    /// Whether `SITE_URL` was set rather than defaulted.
    pub site_url_explicit: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            content_api: ContentApiConfig::from_env(),
            site: SiteConfig::from_env(),
            content_api_explicit: env::var_os("WORDPRESS_API_URL").is_some(),
            site_url_explicit: env::var_os("SITE_URL").is_some(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            environment: "development".to_string(),
            content_api: ContentApiConfig::default(),
            site: SiteConfig::default(),
            content_api_explicit: false,
            site_url_explicit: false,
        }
    }
}
