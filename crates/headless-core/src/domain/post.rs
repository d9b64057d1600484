use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{list_or_map, zero_as_none};
use super::{Embedded, EmbeddedTerm, Links, Media, Rendered, Title};

/// A blog post as served by the `/posts` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
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
    pub sticky: bool,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub meta: serde_json::Value,
    #[serde(default)]
    pub categories: BTreeSet<u64>,
    #[serde(default)]
    pub tags: BTreeSet<u64>,
    #[serde(default, deserialize_with = "list_or_map")]
    pub class_list: Vec<String>,
    #[serde(default, rename = "_links")]
    pub links: Links,
    #[serde(default, rename = "_embedded", skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Embedded>,
}

impl Post {
    /// Source URL of the featured image, when it was embedded in the response.
    pub fn featured_image(&self) -> Option<&str> {
        self.featured_media_item()
            .map(|media| media.source_url.as_str())
            .filter(|url| !url.is_empty())
    }

    /// The embedded featured media record, with its size variants.
    pub fn featured_media_item(&self) -> Option<&Media> {
        self.embedded.as_ref()?.featured_media.first()
    }

    /// Embedded terms of one taxonomy (`category`, `post_tag`).
    pub fn embedded_terms(&self, taxonomy: &str) -> Vec<&EmbeddedTerm> {
        self.embedded
            .as_ref()
            .map(|embedded| embedded.terms_in(taxonomy).collect())
            .unwrap_or_default()
    }

    /// Display name of the embedded author.
    pub fn author_name(&self) -> Option<&str> {
        self.embedded
            .as_ref()?
            .author
            .first()
            .map(|author| author.name.as_str())
    }
}
