//! Site-wide search.

use actix_web::{HttpResponse, web};
use headless_core::query::SearchQuery;
use headless_shared::dto::{SearchHit, SearchParams};
use headless_shared::{ApiResponse, PageInfo};

use crate::content::{Degrade, DegradedNotice};
use crate::middleware::{AppError, AppResult};
use crate::state::AppState;
use crate::views::search_hit;

const RESULTS_PER_PAGE: u32 = 10;

/// GET /api/search?q&page
pub async fn search(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();
    let terms = params.q.as_deref().map(str::trim).unwrap_or_default();
    if terms.is_empty() {
        return Err(AppError::BadRequest("Search terms must not be empty".into()));
    }

    let page = params.page.unwrap_or(1).max(1);
    let query = SearchQuery {
        page: Some(page),
        per_page: Some(RESULTS_PER_PAGE),
        ..Default::default()
    };
    let results = state.content.search(terms, &query).await;
    let degraded = results.is_err();
    let results = results.degrade();

    let hits: Vec<SearchHit> = results.items.iter().map(search_hit).collect();
    Ok(HttpResponse::Ok().json(
        ApiResponse::ok(hits)
            .with_pagination(PageInfo::new(page, results.total_pages, results.total))
            .noting_degraded(degraded),
    ))
}
