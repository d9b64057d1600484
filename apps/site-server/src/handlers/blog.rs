//! Blog listing and post detail.

use actix_web::{HttpResponse, web};
use headless_core::query::{CategoryQuery, Order, PostQuery};
use headless_core::seo::blog_metadata;
use headless_shared::dto::{BlogParams, BlogView, PageDocument};
use headless_shared::{ApiResponse, PageInfo};

use crate::content::{Degrade, DegradedNotice};
use crate::middleware::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{self, Head};

pub const POSTS_PER_PAGE: u32 = 12;
const FILTER_CATEGORIES: u32 = 20;
const RELATED_LIMIT: usize = 3;

/// Posts, newest first, optionally filtered by search terms and category.
///
/// GET /api/blog?page&search&category
pub async fn list(state: web::Data<AppState>, params: web::Query<BlogParams>) -> HttpResponse {
    let params = params.into_inner();
    let page = params.page.unwrap_or(1).max(1);
    let search = params.search.filter(|s| !s.trim().is_empty());

    let post_query = PostQuery {
        page: Some(page),
        per_page: Some(POSTS_PER_PAGE),
        search: search.clone(),
        categories: params.category.map(|id| vec![id]),
        orderby: Some("date".to_string()),
        order: Some(Order::Desc),
        embed: true,
        ..Default::default()
    };
    let category_query = CategoryQuery {
        per_page: Some(FILTER_CATEGORIES),
        hide_empty: Some(true),
        ..Default::default()
    };

    let (posts, categories) = tokio::join!(
        state.content.list_posts(&post_query),
        state.content.list_categories(&category_query),
    );
    let degraded = posts.is_err() || categories.is_err();
    let posts = posts.degrade();
    let categories = categories.degrade();

    let view = BlogView {
        posts: posts
            .items
            .iter()
            .map(|post| views::post_card(post, &categories.items))
            .collect(),
        categories: categories.items.iter().map(views::category_option).collect(),
        search,
        category: params.category,
    };
    let pagination = PageInfo::new(page, posts.total_pages, posts.total);

    HttpResponse::Ok().json(
        ApiResponse::ok(PageDocument {
            head: Head::new(blog_metadata(state.site())),
            body: view,
        })
        .with_pagination(pagination)
        .noting_degraded(degraded),
    )
}

/// A single post with related posts from its first category.
///
/// GET /api/blog/{slug}
pub async fn detail(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let post = state
        .content
        .get_post_by_slug(&slug)
        .await
        .degrade()
        .ok_or_else(|| AppError::NotFound(format!("Post '{}' not found", slug)))?;

    let related = match post.categories.first() {
        Some(&category) => {
            let query = PostQuery {
                per_page: Some(RELATED_LIMIT as u32 + 1),
                categories: Some(vec![category]),
                embed: true,
                ..Default::default()
            };
            state.content.list_posts(&query).await.degrade().items
        }
        None => Vec::new(),
    };
    let related: Vec<_> = views::related_posts(&post, &related, RELATED_LIMIT)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(slug = %slug, related = related.len(), "Rendering post");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PageDocument {
        head: views::post_head(state.site(), &post),
        body: views::post_detail(&post, &[], &related),
    })))
}
