//! Health check endpoint.
//!
//! Reports liveness plus whether the content API answered a connectivity
//! check. Overlapping checks share [`AppState::content_probe`]; a check that
//! finishes after a newer one started reports the newer outcome.

use actix_web::{HttpResponse, web};
use headless_core::view::Applied;
use serde::Serialize;

use crate::state::{AppState, ContentApiStatus};

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the content API is unreachable.
    pub status: &'static str,
    pub version: &'static str,
    pub source: &'static str,
    pub content_api: ContentApiStatus,
}

/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let token = state.content_probe.begin();
    let outcome = ContentApiStatus::from_probe(state.content.check_connectivity().await);

    let content_api = match state.content_probe.complete(token, outcome.clone()) {
        Applied::Current => outcome,
        Applied::Stale => {
            tracing::debug!(
                generation = token.generation(),
                "Connectivity check superseded by a newer one"
            );
            state.content_probe.value().unwrap_or(outcome)
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: if content_api.reachable { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        source: state.source_kind,
        content_api,
    })
}
