use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::zero_as_none;
use super::{Embedded, Links, Rendered, Title};

/// A static page as served by the `/pages` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: u64,
    pub date: NaiveDateTime,
    #[serde(default)]
    pub date_gmt: Option<NaiveDateTime>,
    pub modified: NaiveDateTime,
    #[serde(default)]
    pub modified_gmt: Option<NaiveDateTime>,
    pub slug: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub guid: Title,
    pub title: Title,
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    #[serde(default)]
    pub author: u64,
    #[serde(default, deserialize_with = "zero_as_none")]
    pub featured_media: Option<u64>,
    #[serde(default)]
    pub comment_status: String,
    #[serde(default)]
    pub ping_status: String,
    #[serde(default)]
    pub menu_order: i64,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub meta: serde_json::Value,
    /// Parent page; top-level pages have none.
    #[serde(default, deserialize_with = "zero_as_none")]
    pub parent: Option<u64>,
    #[serde(default, rename = "_links")]
    pub links: Links,
    #[serde(default, rename = "_embedded", skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Embedded>,
}
