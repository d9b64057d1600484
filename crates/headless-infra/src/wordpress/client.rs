//! `ContentSource` over the WordPress REST API.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use headless_core::ContentError;
use headless_core::domain::{Author, Category, Media, Page, Paginated, Post, SearchResult, Tag};
use headless_core::ports::{ContentSource, Operation};
use headless_core::query::{
    AuthorQuery, CategoryQuery, MediaQuery, PageQuery, PostQuery, QueryParams, SearchQuery,
    TagQuery, ToQuery,
};

use super::pagination::Totals;
use crate::config::ContentApiConfig;

/// Reads content from a WordPress REST API.
///
/// Holds only the immutable configuration and a pooled HTTP client, so one
/// instance is shared by every caller. Each call is a single GET bounded by
/// the configured timeout and is never retried.
#[derive(Debug, Clone)]
pub struct WordPressClient {
    client: Client,
    base_url: Url,
    config: ContentApiConfig,
}

impl WordPressClient {
    pub fn new(config: ContentApiConfig) -> Result<Self, ContentError> {
        let base_url = config.endpoint_base()?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("headless-blog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ContentError::InvalidConfig(format!("HTTP client: {}", e)))?;

        tracing::info!(
            base_url = %base_url,
            timeout_secs = config.timeout.as_secs_f32(),
            "Content API client configured"
        );

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// Create from environment configuration.
    pub fn from_env() -> Result<Self, ContentError> {
        Self::new(ContentApiConfig::from_env())
    }

    pub fn config(&self) -> &ContentApiConfig {
        &self.config
    }

    fn endpoint(
        &self,
        operation: Operation,
        path: &str,
        params: &QueryParams,
    ) -> Result<Url, ContentError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ContentError::fetch_failed(operation, e))?;
        if !params.is_empty() {
            url.set_query(Some(&params.encode()));
        }
        Ok(url)
    }

    async fn send(&self, operation: Operation, url: Url) -> Result<Response, ContentError> {
        tracing::debug!(operation = %operation, url = %url, "Fetching content");
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| ContentError::fetch_failed(operation, e))
    }

    async fn decode<T: DeserializeOwned>(
        operation: Operation,
        response: Response,
    ) -> Result<T, ContentError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ContentError::fetch_failed(operation, e))
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
        params: &QueryParams,
    ) -> Result<Paginated<T>, ContentError> {
        let url = self.endpoint(operation, path, params)?;
        let response = self
            .send(operation, url)
            .await?
            .error_for_status()
            .map_err(|e| ContentError::fetch_failed(operation, e))?;

        let totals = Totals::from_headers(response.headers());
        let items: Vec<T> = Self::decode(operation, response).await?;

        tracing::debug!(
            operation = %operation,
            count = items.len(),
            total = totals.total,
            total_pages = totals.total_pages,
            "Content fetched"
        );

        Ok(Paginated::new(items, totals.total_pages, totals.total))
    }

    /// Slug lookups go through the list endpoint; the first match wins.
    async fn fetch_first<T: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
        params: &QueryParams,
    ) -> Result<Option<T>, ContentError> {
        let page = self.fetch_list::<T>(operation, path, params).await?;
        Ok(page.items.into_iter().next())
    }

    /// Id lookups hit the item endpoint, which answers 404 for unknown ids.
    async fn fetch_one<T: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
        params: &QueryParams,
    ) -> Result<Option<T>, ContentError> {
        let url = self.endpoint(operation, path, params)?;
        let response = self.send(operation, url).await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(operation = %operation, "Content not found");
            return Ok(None);
        }

        let response = response
            .error_for_status()
            .map_err(|e| ContentError::fetch_failed(operation, e))?;
        Self::decode(operation, response).await.map(Some)
    }

    fn by_slug(slug: &str) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("slug", slug).push_flag("_embed", true);
        params
    }

    fn embedded() -> QueryParams {
        let mut params = QueryParams::new();
        params.push_flag("_embed", true);
        params
    }
}

#[async_trait]
impl ContentSource for WordPressClient {
    async fn list_posts(&self, query: &PostQuery) -> Result<Paginated<Post>, ContentError> {
        self.fetch_list(Operation::ListPosts, "posts", &query.to_query())
            .await
    }

    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>, ContentError> {
        self.fetch_first(Operation::PostBySlug, "posts", &Self::by_slug(slug))
            .await
    }

    async fn get_post_by_id(&self, id: u64) -> Result<Option<Post>, ContentError> {
        self.fetch_one(Operation::PostById, &format!("posts/{id}"), &Self::embedded())
            .await
    }

    async fn list_pages(&self, query: &PageQuery) -> Result<Paginated<Page>, ContentError> {
        self.fetch_list(Operation::ListPages, "pages", &query.to_query())
            .await
    }

    async fn get_page_by_slug(&self, slug: &str) -> Result<Option<Page>, ContentError> {
        self.fetch_first(Operation::PageBySlug, "pages", &Self::by_slug(slug))
            .await
    }

    async fn list_categories(
        &self,
        query: &CategoryQuery,
    ) -> Result<Paginated<Category>, ContentError> {
        self.fetch_list(Operation::ListCategories, "categories", &query.to_query())
            .await
    }

    async fn list_tags(&self, query: &TagQuery) -> Result<Paginated<Tag>, ContentError> {
        self.fetch_list(Operation::ListTags, "tags", &query.to_query())
            .await
    }

    async fn list_media(&self, query: &MediaQuery) -> Result<Paginated<Media>, ContentError> {
        self.fetch_list(Operation::ListMedia, "media", &query.to_query())
            .await
    }

    async fn get_media_by_id(&self, id: u64) -> Result<Option<Media>, ContentError> {
        self.fetch_one(Operation::MediaById, &format!("media/{id}"), &QueryParams::new())
            .await
    }

    async fn list_authors(&self, query: &AuthorQuery) -> Result<Paginated<Author>, ContentError> {
        self.fetch_list(Operation::ListAuthors, "users", &query.to_query())
            .await
    }

    async fn get_author_by_id(&self, id: u64) -> Result<Option<Author>, ContentError> {
        self.fetch_one(Operation::AuthorById, &format!("users/{id}"), &QueryParams::new())
            .await
    }

    async fn search(
        &self,
        terms: &str,
        query: &SearchQuery,
    ) -> Result<Paginated<SearchResult>, ContentError> {
        self.fetch_list(Operation::Search, "search", &query.to_query_for(terms))
            .await
    }

    async fn check_connectivity(&self) -> Result<u16, ContentError> {
        let operation = Operation::Connectivity;
        let mut params = QueryParams::new();
        params.push("per_page", 1);
        let url = self.endpoint(operation, "posts", &params)?;

        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| ContentError::fetch_failed(operation, e))?;

        let status = response.status();
        if status.is_success() {
            Ok(status.as_u16())
        } else {
            Err(ContentError::fetch_failed(
                operation,
                format!("API returned status {}", status.as_u16()),
            ))
        }
    }
}
