use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Author, Category, Media, Page, Paginated, Post, SearchResult, Tag};
use crate::error::ContentError;
use crate::query::{
    AuthorQuery, CategoryQuery, MediaQuery, PageQuery, PostQuery, SearchQuery, TagQuery,
};

/// Names each content operation, for error reports and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    ListPosts,
    PostBySlug,
    PostById,
    ListPages,
    PageBySlug,
    ListCategories,
    ListTags,
    ListMedia,
    MediaById,
    ListAuthors,
    AuthorById,
    Search,
    Connectivity,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ListPosts => "posts",
            Operation::PostBySlug => "post by slug",
            Operation::PostById => "post by id",
            Operation::ListPages => "pages",
            Operation::PageBySlug => "page by slug",
            Operation::ListCategories => "categories",
            Operation::ListTags => "tags",
            Operation::ListMedia => "media",
            Operation::MediaById => "media by id",
            Operation::ListAuthors => "authors",
            Operation::AuthorById => "author by id",
            Operation::Search => "search results",
            Operation::Connectivity => "connectivity probe",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only access to the remote content API.
///
/// Each call is one independent request. Lookups report absence as
/// `Ok(None)`; every other failure is a [`ContentError::FetchFailed`].
/// Implementations hold no mutable state between calls.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// List posts matching the filter.
    async fn list_posts(&self, query: &PostQuery) -> Result<Paginated<Post>, ContentError>;

    /// Find a post by exact slug, with related resources embedded.
    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>, ContentError>;

    /// Find a post by id, with related resources embedded.
    async fn get_post_by_id(&self, id: u64) -> Result<Option<Post>, ContentError>;

    async fn list_pages(&self, query: &PageQuery) -> Result<Paginated<Page>, ContentError>;

    async fn get_page_by_slug(&self, slug: &str) -> Result<Option<Page>, ContentError>;

    async fn list_categories(
        &self,
        query: &CategoryQuery,
    ) -> Result<Paginated<Category>, ContentError>;

    async fn list_tags(&self, query: &TagQuery) -> Result<Paginated<Tag>, ContentError>;

    async fn list_media(&self, query: &MediaQuery) -> Result<Paginated<Media>, ContentError>;

    async fn get_media_by_id(&self, id: u64) -> Result<Option<Media>, ContentError>;

    async fn list_authors(&self, query: &AuthorQuery) -> Result<Paginated<Author>, ContentError>;

    async fn get_author_by_id(&self, id: u64) -> Result<Option<Author>, ContentError>;

    /// Site-wide search across content types.
    async fn search(
        &self,
        terms: &str,
        query: &SearchQuery,
    ) -> Result<Paginated<SearchResult>, ContentError>;

    /// Check that the source answers at all. Returns the HTTP status seen.
    async fn check_connectivity(&self) -> Result<u16, ContentError>;
}
