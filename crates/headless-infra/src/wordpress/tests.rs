use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use headless_core::ContentError;
use headless_core::ports::{ContentSource, Operation};
use headless_core::query::{CategoryQuery, Order, PostQuery, SearchQuery};

use super::WordPressClient;
use crate::config::ContentApiConfig;

fn post_json(id: u64, slug: &str) -> Value {
    json!({
        "id": id,
        "date": "2024-06-01T10:00:00",
        "modified": "2024-06-02T10:00:00",
        "slug": slug,
        "status": "publish",
        "type": "post",
        "title": { "rendered": format!("Post {id}") },
        "content": { "rendered": "<p>Hello world</p>", "protected": false },
        "excerpt": { "rendered": "<p>Hello</p>", "protected": false },
        "author": 1,
        "featured_media": 0,
        "categories": [1],
        "tags": []
    })
}

async fn client_for(server: &MockServer) -> WordPressClient {
    WordPressClient::new(
        ContentApiConfig::new(format!("{}/wp-json/wp/v2", server.uri()))
            .with_timeout(Duration::from_millis(300)),
    )
    .unwrap()
}

async fn last_query(server: &MockServer) -> Option<String> {
    let requests = server.received_requests().await.unwrap();
    requests.last().unwrap().url.query().map(String::from)
}

#[tokio::test]
async fn test_list_posts_reads_body_and_paging_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([post_json(1, "one"), post_json(2, "two")]))
                .insert_header("x-wp-totalpages", "7")
                .insert_header("x-wp-total", "13"),
        )
        .mount(&server)
        .await;

    let page = client_for(&server)
        .await
        .list_posts(&PostQuery::default())
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1].slug, "two");
    assert_eq!(page.total_pages, 7);
    assert_eq!(page.total, 13);
}

#[tokio::test]
async fn test_list_without_paging_headers_uses_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let page = client_for(&server)
        .await
        .list_categories(&CategoryQuery::default())
        .await
        .unwrap();

    assert!(page.is_empty());
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_only_present_filter_fields_reach_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    client.list_posts(&PostQuery::default()).await.unwrap();
    assert_eq!(last_query(&server).await, None);

    let query = PostQuery {
        page: Some(3),
        search: Some("tokio & actix".into()),
        tags: Some(vec![4, 9]),
        order: Some(Order::Asc),
        embed: true,
        ..Default::default()
    };
    client.list_posts(&query).await.unwrap();
    assert_eq!(
        last_query(&server).await.as_deref(),
        Some("page=3&search=tokio+%26+actix&tags=4%2C9&order=asc&_embed=true")
    );
}

#[tokio::test]
async fn test_post_by_slug_returns_first_match_with_embed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .and(query_param("slug", "hello-world"))
        .and(query_param("_embed", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([post_json(5, "hello-world")])))
        .mount(&server)
        .await;

    let post = client_for(&server)
        .await
        .get_post_by_slug("hello-world")
        .await
        .unwrap();

    assert_eq!(post.map(|p| p.id), Some(5));
}

#[tokio::test]
async fn test_missing_slug_is_not_found_not_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .and(query_param("slug", "missing-slug"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .await
        .get_post_by_slug("missing-slug")
        .await;

    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "rest_post_invalid_id",
            "message": "Invalid post ID.",
            "data": { "status": 404 }
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).await.get_post_by_id(999).await;
    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn test_server_error_is_uniform_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/tags"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .list_tags(&Default::default())
        .await
        .unwrap_err();

    assert_eq!(err.operation(), Some(Operation::ListTags));
    assert!(err.to_string().starts_with("Failed to fetch tags"));
}

#[tokio::test]
async fn test_server_error_on_slug_lookup_is_not_reported_as_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/pages"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = client_for(&server).await.get_page_by_slug("about").await;
    assert!(matches!(
        result,
        Err(ContentError::FetchFailed { operation: Operation::PageBySlug, .. })
    ));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let result = client_for(&server)
        .await
        .list_posts(&PostQuery::default())
        .await;

    assert!(matches!(
        result,
        Err(ContentError::FetchFailed { operation: Operation::ListPosts, .. })
    ));
}

#[tokio::test]
async fn test_malformed_body_is_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .await
        .list_posts(&PostQuery::default())
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_author_and_media_lookups() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/users/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "name": "Ada",
            "slug": "ada",
            "avatar_urls": { "24": "https://example.com/a24.png", "96": "https://example.com/a96.png" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/media/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 8,
            "media_type": "image",
            "mime_type": "image/png",
            "alt_text": "diagram",
            "source_url": "https://example.com/diagram.png"
        })))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let author = client.get_author_by_id(3).await.unwrap().unwrap();
    assert_eq!(author.avatar(96), Some("https://example.com/a96.png"));

    let media = client.get_media_by_id(8).await.unwrap().unwrap();
    assert_eq!(media.alt_text, "diagram");
}

#[tokio::test]
async fn test_search_sends_terms_and_types() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/search"))
        .and(query_param("search", "lifetimes"))
        .and(query_param("type", "post"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{
                    "id": 5,
                    "title": "Lifetimes explained",
                    "url": "https://example.com/lifetimes",
                    "type": "post",
                    "subtype": "post"
                }]))
                .insert_header("x-wp-total", "1"),
        )
        .mount(&server)
        .await;

    let results = client_for(&server)
        .await
        .search(
            "lifetimes",
            &SearchQuery {
                kind: Some(vec!["post".into()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(results.total, 1);
    assert_eq!(results.items[0].title, "Lifetimes explained");
}

#[tokio::test]
async fn test_connectivity_probe_uses_head() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/wp-json/wp/v2/posts"))
        .and(query_param("per_page", "1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    assert_eq!(client_for(&server).await.check_connectivity().await.unwrap(), 200);
}

#[tokio::test]
async fn test_connectivity_probe_reports_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = client_for(&server).await.check_connectivity().await.unwrap_err();
    assert!(err.to_string().contains("502"));
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let result = WordPressClient::new(ContentApiConfig::new("::nope::"));
    assert!(matches!(result, Err(ContentError::InvalidConfig(_))));
}

fn post_with_forbidden_media(id: u64, slug: &str) -> Value {
    let mut post = post_json(id, slug);
    post["featured_media"] = json!(77);
    post["_embedded"] = json!({
        "author": [{ "id": 1, "name": "Ada", "slug": "ada" }],
        "wp:featuredmedia": [{
            "code": "rest_forbidden",
            "message": "Sorry, you are not allowed to do that.",
            "data": { "status": 401 }
        }]
    });
    post
}

#[tokio::test]
async fn test_embedded_error_object_keeps_the_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            post_json(1, "plain"),
            post_with_forbidden_media(2, "private-cover"),
        ])))
        .mount(&server)
        .await;

    let page = client_for(&server)
        .await
        .list_posts(&PostQuery {
            embed: true,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1].featured_media, Some(77));
    assert_eq!(page.items[1].featured_image(), None);
    assert_eq!(page.items[1].author_name(), Some("Ada"));
}

#[tokio::test]
async fn test_slug_lookup_survives_embedded_error_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .and(query_param("slug", "private-cover"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([post_with_forbidden_media(2, "private-cover")])),
        )
        .mount(&server)
        .await;

    let post = client_for(&server)
        .await
        .get_post_by_slug("private-cover")
        .await
        .unwrap();

    assert_eq!(post.map(|p| p.id), Some(2));
}

#[tokio::test]
async fn test_class_list_keyed_by_index_decodes() {
    let server = MockServer::start().await;
    let mut post = post_json(3, "filtered-classes");
    post["class_list"] = json!({ "0": "post-3", "2": "type-post" });
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([post])))
        .mount(&server)
        .await;

    let page = client_for(&server)
        .await
        .list_posts(&PostQuery::default())
        .await
        .unwrap();

    assert_eq!(page.items[0].class_list, vec!["post-3", "type-post"]);
}
