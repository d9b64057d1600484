use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::Links;
use super::common::zero_as_none;

/// A hierarchical post category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    pub name: String,
    pub slug: String,
    #[serde(default = "default_category_taxonomy")]
    pub taxonomy: String,
    #[serde(default, deserialize_with = "zero_as_none")]
    pub parent: Option<u64>,
    #[serde(default, rename = "_links")]
    pub links: Links,
}

/// A flat post tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    pub name: String,
    pub slug: String,
    #[serde(default = "default_tag_taxonomy")]
    pub taxonomy: String,
    #[serde(default, rename = "_links")]
    pub links: Links,
}

fn default_category_taxonomy() -> String {
    "category".to_string()
}

fn default_tag_taxonomy() -> String {
    "post_tag".to_string()
}

/// Anything with an id and a display name.
pub trait Term {
    fn id(&self) -> u64;
    fn name(&self) -> &str;
}

impl Term for Category {
    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Term for Tag {
    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Term for super::EmbeddedTerm {
    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Resolve a term reference to its name.
///
/// Posts reference terms by id only and nothing guarantees the term still
/// exists, so an unknown id falls back to `"{kind} {id}"`.
pub fn term_label<'a, T: Term>(kind: &str, id: u64, known: &'a [T]) -> Cow<'a, str> {
    known
        .iter()
        .find(|term| term.id() == id)
        .map(|term| Cow::Borrowed(term.name()))
        .unwrap_or_else(|| Cow::Owned(format!("{kind} {id}")))
}
