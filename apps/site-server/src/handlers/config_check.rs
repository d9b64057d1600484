//! Configuration checker.
//!
//! Reports which settings were supplied and whether the content API answers.
//! Useful right after deploying to a new environment.

use actix_web::{HttpResponse, web};
use headless_shared::ApiResponse;
use headless_shared::dto::{CheckStatus, ConfigCheck, ConfigReport};

use crate::config::AppConfig;
use crate::state::AppState;

/// GET /api/config
pub async fn config_check(state: web::Data<AppState>) -> HttpResponse {
    let config = &state.config;
    let mut checks = settings_checks(config);

    let connectivity = match state.content.check_connectivity().await {
        Ok(status) => ConfigCheck {
            name: "API connectivity".into(),
            status: CheckStatus::Success,
            message: "Successfully connected to the content API".into(),
            details: Some(format!("Status: {}", status)),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Content API connectivity check failed");
            ConfigCheck {
                name: "API connectivity".into(),
                status: CheckStatus::Error,
                message: "Failed to connect to the content API".into(),
                details: Some(e.to_string()),
            }
        }
    };
    checks.insert(1, connectivity);

    let report = ConfigReport { checks };
    let response = if report.has_errors() {
        ApiResponse::ok(report).with_message("Configuration has errors")
    } else {
        ApiResponse::ok(report)
    };
    HttpResponse::Ok().json(response)
}

fn settings_checks(config: &AppConfig) -> Vec<ConfigCheck> {
    let api_url = if config.content_api_explicit {
        ConfigCheck {
            name: "WORDPRESS_API_URL".into(),
            status: CheckStatus::Success,
            message: "Environment variable is set".into(),
            details: Some(config.content_api.base_url.clone()),
        }
    } else {
        ConfigCheck {
            name: "WORDPRESS_API_URL".into(),
            status: CheckStatus::Warning,
            message: "Environment variable not set, using default".into(),
            details: Some(config.content_api.base_url.clone()),
        }
    };

    let site_url = if config.site_url_explicit {
        ConfigCheck {
            name: "SITE_URL".into(),
            status: CheckStatus::Success,
            message: "Site URL is configured".into(),
            details: Some(config.site.url.clone()),
        }
    } else {
        ConfigCheck {
            name: "SITE_URL".into(),
            status: CheckStatus::Warning,
            message: "Site URL not set, using default".into(),
            details: Some(config.site.url.clone()),
        }
    };

    let environment = ConfigCheck {
        name: "Environment".into(),
        status: CheckStatus::Success,
        message: format!("Running in {} mode", config.environment),
        details: None,
    };

    vec![api_url, site_url, environment]
}
