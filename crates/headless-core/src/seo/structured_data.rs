//! schema.org JSON-LD objects.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::markup::strip_markup;
use super::site::SiteConfig;
use crate::domain::Post;

const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
}

impl Organization {
    fn of(site: &SiteConfig) -> Self {
        Self {
            kind: "Organization",
            name: site.name.clone(),
            url: site.url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebPageRef {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPosting {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub description: String,
    pub author: Organization,
    pub publisher: Organization,
    pub date_published: NaiveDateTime,
    pub date_modified: NaiveDateTime,
    pub main_entity_of_page: WebPageRef,
    pub url: String,
    pub image: String,
    pub article_section: String,
    pub in_language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub target: String,
    #[serde(rename = "query-input")]
    pub query_input: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    pub potential_action: SearchAction,
    pub publisher: Organization,
}

/// `en_US` → `en-US`.
fn language_tag(locale: &str) -> String {
    locale.replace('_', "-")
}

/// `BlogPosting` for a post. Author and publisher are the site itself.
pub fn post_json_ld(site: &SiteConfig, post: &Post) -> BlogPosting {
    let url = site.post_url(&post.slug);
    BlogPosting {
        context: SCHEMA_CONTEXT,
        kind: "BlogPosting",
        headline: strip_markup(&post.title.rendered),
        description: strip_markup(&post.excerpt.rendered).trim().to_string(),
        author: Organization::of(site),
        publisher: Organization::of(site),
        date_published: post.date,
        date_modified: post.modified,
        main_entity_of_page: WebPageRef {
            kind: "WebPage",
            id: url.clone(),
        },
        url,
        image: post
            .featured_image()
            .map(|src| site.absolute(src))
            .unwrap_or_else(|| site.absolute(&site.og_image)),
        article_section: site.section.clone(),
        in_language: language_tag(&site.locale),
    }
}

/// `WebSite` for the site root, advertising the blog search.
pub fn website_json_ld(site: &SiteConfig) -> WebSite {
    WebSite {
        context: SCHEMA_CONTEXT,
        kind: "WebSite",
        name: site.name.clone(),
        description: site.description.clone(),
        url: site.url.clone(),
        potential_action: SearchAction {
            kind: "SearchAction",
            target: format!("{}/blog?search={{search_term_string}}", site.url),
            query_input: "required name=search_term_string",
        },
        publisher: Organization::of(site),
    }
}
