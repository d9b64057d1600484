//! Home page.

use actix_web::{HttpResponse, web};
use headless_core::query::{Order, PostQuery};
use headless_core::seo::{home_metadata, website_json_ld};
use headless_shared::ApiResponse;
use headless_shared::dto::{HomeView, PageDocument};

use crate::content::{Degrade, DegradedNotice};
use crate::state::AppState;
use crate::views::{Head, JsonLd, post_card};

const HOME_POSTS: u32 = 6;
const FEATURED: usize = 3;

/// GET /api/home
pub async fn home(state: web::Data<AppState>) -> HttpResponse {
    let query = PostQuery {
        per_page: Some(HOME_POSTS),
        orderby: Some("date".to_string()),
        order: Some(Order::Desc),
        embed: true,
        ..Default::default()
    };
    let posts = state.content.list_posts(&query).await;
    let degraded = posts.is_err();
    let posts = posts.degrade();

    let mut cards = posts.items.iter().map(|post| post_card(post, &[]));
    let featured = cards.by_ref().take(FEATURED).collect();
    let recent = cards.collect();

    let site = state.site();
    let head =
        Head::new(home_metadata(site)).with_json_ld(JsonLd::Site(website_json_ld(site)));

    HttpResponse::Ok().json(
        ApiResponse::ok(PageDocument {
            head,
            body: HomeView { featured, recent },
        })
        .noting_degraded(degraded),
    )
}
