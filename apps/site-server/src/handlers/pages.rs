//! Static pages.

use actix_web::{HttpResponse, web};
use headless_core::seo::page_metadata;
use headless_shared::ApiResponse;
use headless_shared::dto::PageDocument;

use crate::content::Degrade;
use crate::middleware::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{Head, page_detail};

/// GET /api/pages/{slug}
pub async fn detail(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let page = state
        .content
        .get_page_by_slug(&slug)
        .await
        .degrade()
        .ok_or_else(|| AppError::NotFound(format!("Page '{}' not found", slug)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PageDocument {
        head: Head::new(page_metadata(state.site(), &page)),
        body: page_detail(&page),
    })))
}
