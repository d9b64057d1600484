use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Links;

/// A post author from the `/users` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub slug: String,
    /// Pixel size (as the API's string key, e.g. `"96"`) to avatar URL.
    #[serde(default)]
    pub avatar_urls: BTreeMap<String, String>,
    #[serde(default, rename = "_links")]
    pub links: Links,
}

impl Author {
    pub fn avatar(&self, size: u32) -> Option<&str> {
        self.avatar_urls.get(&size.to_string()).map(String::as_str)
    }
}
