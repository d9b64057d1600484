//! Mapping from content items to the view models the page routes return.

use std::collections::BTreeSet;

use headless_core::domain::{
    Category, EmbeddedTerm, Page, Post, SearchResult, Tag, Term, term_label,
};
use headless_core::seo::{
    BlogPosting, PageMetadata, SiteConfig, WebSite, post_json_ld, post_metadata, reading_time,
    snippet, strip_markup,
};
use headless_shared::dto::{
    CategoryOption, PageDetail, PostCard, PostDetail, SearchHit, TermBadge,
};
use serde::Serialize;

/// Excerpt length on grid cards.
pub const CARD_EXCERPT_CHARS: usize = 150;
/// Excerpt length on the related-posts strip.
pub const RELATED_EXCERPT_CHARS: usize = 120;
/// Badges shown per taxonomy on a card.
pub const MAX_BADGES: usize = 3;
/// Card images use the smallest upload variant at least this wide.
pub const CARD_IMAGE_WIDTH: u32 = 768;

/// Document head of a page route.
#[derive(Debug, Clone, Serialize)]
pub struct Head {
    pub metadata: PageMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_ld: Option<JsonLd>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum JsonLd {
    Post(BlogPosting),
    Site(WebSite),
}

impl Head {
    pub fn new(metadata: PageMetadata) -> Self {
        Self {
            metadata,
            json_ld: None,
        }
    }

    pub fn with_json_ld(mut self, json_ld: JsonLd) -> Self {
        self.json_ld = Some(json_ld);
        self
    }
}

pub fn post_card(post: &Post, categories: &[Category]) -> PostCard {
    card_with_excerpt(post, categories, CARD_EXCERPT_CHARS)
}

pub fn related_card(post: &Post, categories: &[Category]) -> PostCard {
    card_with_excerpt(post, categories, RELATED_EXCERPT_CHARS)
}

fn card_with_excerpt(post: &Post, categories: &[Category], excerpt_chars: usize) -> PostCard {
    PostCard {
        id: post.id,
        slug: post.slug.clone(),
        title: strip_markup(&post.title.rendered),
        excerpt: snippet(&post.excerpt.rendered, excerpt_chars),
        date: post.date,
        reading_minutes: reading_time(&post.content.rendered),
        categories: badges(
            &post.categories,
            &post.embedded_terms("category"),
            "Category",
            categories,
            MAX_BADGES,
        ),
        tags: tag_badges(post, MAX_BADGES),
        featured_image: post
            .featured_media_item()
            .map(|media| media.best_fit(CARD_IMAGE_WIDTH))
            .filter(|url| !url.is_empty())
            .map(str::to_string),
        sticky: post.sticky,
    }
}

fn tag_badges(post: &Post, limit: usize) -> Vec<TermBadge> {
    badges::<Tag>(&post.tags, &post.embedded_terms("post_tag"), "Tag", &[], limit)
}

/// Badges for the first `limit` term ids, preferring names embedded in the
/// post itself over the `known` lookup.
fn badges<T: Term>(
    ids: &BTreeSet<u64>,
    embedded: &[&EmbeddedTerm],
    kind: &str,
    known: &[T],
    limit: usize,
) -> Vec<TermBadge> {
    ids.iter()
        .take(limit)
        .map(|&id| {
            let label = embedded
                .iter()
                .find(|term| term.id == id)
                .map(|term| term.name.clone())
                .unwrap_or_else(|| term_label(kind, id, known).into_owned());
            TermBadge { id, label }
        })
        .collect()
}

/// The full post. Unlike cards, the detail lists every tag.
pub fn post_detail(post: &Post, categories: &[Category], related: &[Post]) -> PostDetail {
    let mut card = post_card(post, categories);
    card.tags = tag_badges(post, usize::MAX);

    PostDetail {
        card,
        content_html: post.content.rendered.clone(),
        modified: post.modified,
        author_name: post.author_name().map(str::to_string),
        related: related
            .iter()
            .map(|other| related_card(other, categories))
            .collect(),
    }
}

pub fn post_head(site: &SiteConfig, post: &Post) -> Head {
    Head::new(post_metadata(site, post)).with_json_ld(JsonLd::Post(post_json_ld(site, post)))
}

/// Up to `limit` posts from `candidates` sharing `post`'s first category.
pub fn related_posts<'a>(post: &Post, candidates: &'a [Post], limit: usize) -> Vec<&'a Post> {
    let Some(first) = post.categories.first() else {
        return Vec::new();
    };
    candidates
        .iter()
        .filter(|other| other.id != post.id && other.categories.contains(first))
        .take(limit)
        .collect()
}

pub fn page_detail(page: &Page) -> PageDetail {
    PageDetail {
        id: page.id,
        slug: page.slug.clone(),
        title: strip_markup(&page.title.rendered),
        content_html: page.content.rendered.clone(),
        modified: page.modified,
        parent: page.parent,
    }
}

pub fn category_option(category: &Category) -> CategoryOption {
    CategoryOption {
        id: category.id,
        name: category.name.clone(),
        slug: category.slug.clone(),
        count: category.count,
    }
}

pub fn search_hit(result: &SearchResult) -> SearchHit {
    SearchHit {
        id: result.id,
        title: strip_markup(&result.title),
        url: result.url.clone(),
        kind: result.kind.clone(),
        subtype: result.subtype.clone(),
    }
}
