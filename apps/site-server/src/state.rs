//! Application state - shared across all handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use headless_core::ContentError;
use headless_core::ports::ContentSource;
use headless_core::seo::SiteConfig;
use headless_core::view::ViewState;
use headless_infra::InMemoryContent;
use serde::Serialize;

#[cfg(feature = "wordpress")]
use headless_infra::WordPressClient;

use crate::config::AppConfig;

/// Outcome of the most recent content API connectivity check.
#[derive(Debug, Clone, Serialize)]
pub struct ContentApiStatus {
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub checked_at: DateTime<Utc>,
}

impl ContentApiStatus {
    pub fn from_probe(result: Result<u16, ContentError>) -> Self {
        let checked_at = Utc::now();
        match result {
            Ok(status) => Self {
                reachable: true,
                http_status: Some(status),
                error: None,
                checked_at,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Content API unreachable");
                Self {
                    reachable: false,
                    http_status: None,
                    error: Some(e.to_string()),
                    checked_at,
                }
            }
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentSource>,
    /// Short name of the content backend, reported by the health route.
    pub source_kind: &'static str,
    pub config: Arc<AppConfig>,
    pub content_probe: Arc<ViewState<ContentApiStatus>>,
}

impl AppState {
    /// Build the application state with the appropriate content source.
    pub fn new(config: AppConfig) -> Self {
        #[cfg(feature = "wordpress")]
        let (content, source_kind): (Arc<dyn ContentSource>, &'static str) =
            match WordPressClient::new(config.content_api.clone()) {
                Ok(client) => (Arc::new(client), "wordpress"),
                Err(e) => {
                    tracing::error!(
                        "Failed to configure content API client: {}. Serving empty in-memory content.",
                        e
                    );
                    (Arc::new(InMemoryContent::new()), "in-memory")
                }
            };

        #[cfg(not(feature = "wordpress"))]
        let (content, source_kind): (Arc<dyn ContentSource>, &'static str) = {
            tracing::info!("Running without wordpress feature - using in-memory content");
            (Arc::new(InMemoryContent::new()), "in-memory")
        };

        tracing::info!(source = source_kind, "Application state initialized");

        Self {
            content,
            source_kind,
            config: Arc::new(config),
            content_probe: Arc::new(ViewState::new()),
        }
    }

    /// State over an explicit content source.
    pub fn with_source(content: Arc<dyn ContentSource>, config: AppConfig) -> Self {
        Self {
            content,
            source_kind: "custom",
            config: Arc::new(config),
            content_probe: Arc::new(ViewState::new()),
        }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.config.site
    }
}
