//! Typed filters for the list endpoints.
//!
//! Every filter field is optional. Only fields that are set end up in the
//! query string; everything else is left to the remote API's defaults.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered query-string pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl ToString) -> &mut Self {
        self.0.push((key, value.to_string()));
        self
    }

    pub fn push_opt<V: ToString>(&mut self, key: &'static str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Lists are sent comma-joined, e.g. `categories=1,2,3`.
    pub fn push_list<V: ToString>(&mut self, key: &'static str, values: Option<&[V]>) -> &mut Self {
        if let Some(values) = values {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.push(key, joined);
        }
        self
    }

    pub fn push_flag(&mut self, key: &'static str, set: bool) -> &mut Self {
        if set {
            self.push(key, "true");
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }

    /// Form-url-encoded query string without the leading `?`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }
}

/// Anything that can be turned into query parameters.
pub trait ToQuery {
    fn to_query(&self) -> QueryParams;
}

/// Filter for `/posts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub categories: Option<Vec<u64>>,
    pub tags: Option<Vec<u64>>,
    pub author: Option<u64>,
    pub status: Option<String>,
    pub orderby: Option<String>,
    pub order: Option<Order>,
    /// Ask the API to inline related resources. Only sent when `true`.
    #[serde(default)]
    pub embed: bool,
}

impl ToQuery for PostQuery {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("page", self.page)
            .push_opt("per_page", self.per_page)
            .push_opt("search", self.search.as_deref())
            .push_list("categories", self.categories.as_deref())
            .push_list("tags", self.tags.as_deref())
            .push_opt("author", self.author)
            .push_opt("status", self.status.as_deref())
            .push_opt("orderby", self.orderby.as_deref())
            .push_opt("order", self.order)
            .push_flag("_embed", self.embed);
        q
    }
}

/// Filter for `/pages`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub parent: Option<u64>,
    pub status: Option<String>,
    pub orderby: Option<String>,
    pub order: Option<Order>,
    #[serde(default)]
    pub embed: bool,
}

impl ToQuery for PageQuery {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("page", self.page)
            .push_opt("per_page", self.per_page)
            .push_opt("search", self.search.as_deref())
            .push_opt("parent", self.parent)
            .push_opt("status", self.status.as_deref())
            .push_opt("orderby", self.orderby.as_deref())
            .push_opt("order", self.order)
            .push_flag("_embed", self.embed);
        q
    }
}

/// Filter for `/categories`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub exclude: Option<Vec<u64>>,
    pub include: Option<Vec<u64>>,
    pub order: Option<Order>,
    pub orderby: Option<String>,
    /// Sent as `true` or `false` whenever it is set.
    pub hide_empty: Option<bool>,
    pub parent: Option<u64>,
}

impl ToQuery for CategoryQuery {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("page", self.page)
            .push_opt("per_page", self.per_page)
            .push_opt("search", self.search.as_deref())
            .push_list("exclude", self.exclude.as_deref())
            .push_list("include", self.include.as_deref())
            .push_opt("order", self.order)
            .push_opt("orderby", self.orderby.as_deref())
            .push_opt("hide_empty", self.hide_empty)
            .push_opt("parent", self.parent);
        q
    }
}

/// Filter for `/tags`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub exclude: Option<Vec<u64>>,
    pub include: Option<Vec<u64>>,
    pub order: Option<Order>,
    pub orderby: Option<String>,
    pub hide_empty: Option<bool>,
}

impl ToQuery for TagQuery {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("page", self.page)
            .push_opt("per_page", self.per_page)
            .push_opt("search", self.search.as_deref())
            .push_list("exclude", self.exclude.as_deref())
            .push_list("include", self.include.as_deref())
            .push_opt("order", self.order)
            .push_opt("orderby", self.orderby.as_deref())
            .push_opt("hide_empty", self.hide_empty);
        q
    }
}

/// Filter for `/media`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub author: Option<u64>,
    pub parent: Option<u64>,
    pub media_type: Option<String>,
    pub mime_type: Option<String>,
    pub order: Option<Order>,
    pub orderby: Option<String>,
}

impl ToQuery for MediaQuery {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("page", self.page)
            .push_opt("per_page", self.per_page)
            .push_opt("search", self.search.as_deref())
            .push_opt("author", self.author)
            .push_opt("parent", self.parent)
            .push_opt("media_type", self.media_type.as_deref())
            .push_opt("mime_type", self.mime_type.as_deref())
            .push_opt("order", self.order)
            .push_opt("orderby", self.orderby.as_deref());
        q
    }
}

/// Filter for `/users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub exclude: Option<Vec<u64>>,
    pub include: Option<Vec<u64>>,
    pub order: Option<Order>,
    pub orderby: Option<String>,
    pub roles: Option<Vec<String>>,
}

impl ToQuery for AuthorQuery {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("page", self.page)
            .push_opt("per_page", self.per_page)
            .push_opt("search", self.search.as_deref())
            .push_list("exclude", self.exclude.as_deref())
            .push_list("include", self.include.as_deref())
            .push_opt("order", self.order)
            .push_opt("orderby", self.orderby.as_deref())
            .push_list("roles", self.roles.as_deref());
        q
    }
}

/// Extra filter for `/search`. The search terms themselves are passed
/// separately and always sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "type")]
    pub kind: Option<Vec<String>>,
    pub subtype: Option<Vec<String>>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl SearchQuery {
    pub fn to_query_for(&self, terms: &str) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("search", terms)
            .push_list("type", self.kind.as_deref())
            .push_list("subtype", self.subtype.as_deref())
            .push_opt("page", self.page)
            .push_opt("per_page", self.per_page);
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_sends_nothing() {
        assert!(PostQuery::default().to_query().is_empty());
        assert!(CategoryQuery::default().to_query().is_empty());
        assert_eq!(PostQuery::default().to_query().encode(), "");
    }

    #[test]
    fn test_only_present_post_fields_are_sent() {
        let query = PostQuery {
            page: Some(2),
            per_page: Some(12),
            categories: Some(vec![3, 7]),
            order: Some(Order::Desc),
            orderby: Some("date".into()),
            embed: true,
            ..Default::default()
        };

        assert_eq!(
            query.to_query().encode(),
            "page=2&per_page=12&categories=3%2C7&orderby=date&order=desc&_embed=true"
        );
    }

    #[test]
    fn test_values_are_url_encoded() {
        let query = PostQuery {
            search: Some("rust & wasm".into()),
            ..Default::default()
        };
        assert_eq!(query.to_query().encode(), "search=rust+%26+wasm");
    }

    #[test]
    fn test_embed_false_is_omitted() {
        let query = PageQuery {
            parent: Some(4),
            embed: false,
            ..Default::default()
        };
        let params = query.to_query();
        assert_eq!(params.get("parent"), Some("4"));
        assert_eq!(params.get("_embed"), None);
    }

    #[test]
    fn test_hide_empty_is_sent_when_false() {
        let query = TagQuery {
            hide_empty: Some(false),
            ..Default::default()
        };
        assert_eq!(query.to_query().encode(), "hide_empty=false");
    }

    #[test]
    fn test_author_roles_joined() {
        let query = AuthorQuery {
            roles: Some(vec!["author".into(), "editor".into()]),
            ..Default::default()
        };
        assert_eq!(query.to_query().get("roles"), Some("author,editor"));
    }

    #[test]
    fn test_search_always_carries_terms() {
        let params = SearchQuery {
            kind: Some(vec!["post".into()]),
            ..Default::default()
        }
        .to_query_for("async rust");
        assert_eq!(params.encode(), "search=async+rust&type=post");
    }
}
