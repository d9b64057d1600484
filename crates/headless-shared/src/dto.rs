//! Data Transfer Objects - view models for the page routes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Query string of the blog listing route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogParams {
    pub page: Option<u32>,
    pub search: Option<String>,
    pub category: Option<u64>,
}

/// Query string of the search route. A missing `q` is rejected by the
/// handler, not the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<u32>,
}

/// A category or tag reference with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermBadge {
    pub id: u64,
    pub label: String,
}

/// Summary of a post as shown in grids and lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCard {
    pub id: u64,
    pub slug: String,
    /// Title with markup stripped.
    pub title: String,
    /// Plain-text excerpt, cut to card length.
    pub excerpt: String,
    pub date: NaiveDateTime,
    pub reading_minutes: u32,
    pub categories: Vec<TermBadge>,
    pub tags: Vec<TermBadge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub sticky: bool,
}

/// A post's full page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub card: PostCard,
    /// Remote markup, passed through untouched.
    pub content_html: String,
    pub modified: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub related: Vec<PostCard>,
}

/// A static page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDetail {
    pub id: u64,
    pub slug: String,
    pub title: String,
    /// Remote markup, passed through untouched.
    pub content_html: String,
    pub modified: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
}

/// Category entry of the blog filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub count: u64,
}

/// The home page: a featured row and a recent row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeView {
    pub featured: Vec<PostCard>,
    pub recent: Vec<PostCard>,
}

/// The blog listing with its active filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogView {
    pub posts: Vec<PostCard>,
    pub categories: Vec<CategoryOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: u64,
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subtype: String,
}

/// Page body plus what goes into the document head.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDocument<T, H> {
    pub head: H,
    pub body: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Success,
    Warning,
    Error,
}

/// One line of the configuration report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigCheck {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigReport {
    pub checks: Vec<ConfigCheck>,
}

impl ConfigReport {
    pub fn has_errors(&self) -> bool {
        self.checks
            .iter()
            .any(|check| check.status == CheckStatus::Error)
    }
}
