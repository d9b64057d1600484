//! Shapes shared by several entities.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{Author, Media};

/// A field the remote system returns as rendered markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    pub rendered: String,
    /// Set when the item is password protected and the markup must not be shown.
    #[serde(default)]
    pub protected: bool,
}

impl Rendered {
    pub fn new(rendered: impl Into<String>) -> Self {
        Self {
            rendered: rendered.into(),
            protected: false,
        }
    }
}

/// Titles and GUIDs only carry the rendered markup.
pub type Title = Rendered;

/// One entry of a `_links` relation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeddable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Relation name (`self`, `author`, `wp:term`, ...) to its links.
pub type Links = BTreeMap<String, Vec<Link>>;

/// A taxonomy term as inlined under `_embedded["wp:term"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedTerm {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub taxonomy: String,
    #[serde(default)]
    pub link: String,
}

/// Related resources inlined by the API when `_embed` is requested.
///
/// A private or deleted resource comes back as an error object
/// (`{"code": "rest_forbidden", ...}`) in its slot. Such entries are
/// dropped so the post itself still decodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Embedded {
    #[serde(default, deserialize_with = "skip_invalid")]
    pub author: Vec<Author>,

    #[serde(default, rename = "wp:featuredmedia", deserialize_with = "skip_invalid")]
    pub featured_media: Vec<Media>,

    /// One list per taxonomy, in the order the API reports them.
    #[serde(default, rename = "wp:term", deserialize_with = "skip_invalid_nested")]
    pub terms: Vec<Vec<EmbeddedTerm>>,
}

impl Embedded {
    pub fn terms_in(&self, taxonomy: &str) -> impl Iterator<Item = &EmbeddedTerm> {
        self.terms
            .iter()
            .flatten()
            .filter(move |term| term.taxonomy == taxonomy)
    }
}

/// The API uses `0` for "no reference" on parent and media fields.
pub(crate) fn zero_as_none<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<u64>::deserialize(deserializer)?;
    Ok(value.filter(|id| *id != 0))
}

/// Decode every element that fits `T`, dropping the rest.
fn skip_invalid<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect())
}

fn skip_invalid_nested<'de, D, T>(deserializer: D) -> Result<Vec<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|group| match group {
            Value::Array(items) => Some(
                items
                    .into_iter()
                    .filter_map(|value| serde_json::from_value(value).ok())
                    .collect(),
            ),
            _ => None,
        })
        .collect())
}

/// CSS class lists arrive as an array, or as an object keyed by index once
/// a filter has removed entries.
pub(crate) fn list_or_map<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrMap {
        List(Vec<String>),
        Map(BTreeMap<String, String>),
    }

    Ok(match Option::<ListOrMap>::deserialize(deserializer)? {
        Some(ListOrMap::List(list)) => list,
        Some(ListOrMap::Map(map)) => {
            let mut entries: Vec<(String, String)> = map.into_iter().collect();
            entries.sort_by_key(|(key, _)| key.parse::<u64>().unwrap_or(u64::MAX));
            entries.into_iter().map(|(_, class)| class).collect()
        }
        None => Vec::new(),
    })
}
