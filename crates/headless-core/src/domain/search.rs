use serde::{Deserialize, Serialize};

use super::Links;

/// A hit from the `/search` endpoint. Titles are plain strings here, not
/// rendered markup objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub subtype: String,
    #[serde(default, rename = "_links")]
    pub links: Links,
}
