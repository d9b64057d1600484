use chrono::NaiveDateTime;
use serde::Serialize;

use super::markup::strip_markup;
use super::site::SiteConfig;
use crate::domain::{Page, Post};

const OG_IMAGE_WIDTH: u32 = 1200;
const OG_IMAGE_HEIGHT: u32 = 630;
const TWITTER_CARD: &str = "summary_large_image";

/// Everything a page needs in its document head.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    pub metadata_base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<Robots>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    Website,
    Article,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub kind: OgType,
    pub locale: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub images: Vec<OgImage>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub article: Option<ArticleMeta>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

/// Open Graph fields that only apply to `article` pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleMeta {
    pub published_time: NaiveDateTime,
    pub modified_time: NaiveDateTime,
    pub authors: Vec<String>,
    pub section: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub creator: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    #[serde(rename = "googleBot")]
    pub google_bot: GoogleBot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    #[serde(rename = "max-video-preview")]
    pub max_video_preview: i32,
    #[serde(rename = "max-image-preview")]
    pub max_image_preview: &'static str,
    #[serde(rename = "max-snippet")]
    pub max_snippet: i32,
}

impl Robots {
    /// Index and follow everything, with unrestricted previews.
    pub fn open() -> Self {
        Self {
            index: true,
            follow: true,
            google_bot: GoogleBot {
                index: true,
                follow: true,
                max_video_preview: -1,
                max_image_preview: "large",
                max_snippet: -1,
            },
        }
    }
}

fn og_image(url: String, alt: &str) -> OgImage {
    OgImage {
        url,
        width: OG_IMAGE_WIDTH,
        height: OG_IMAGE_HEIGHT,
        alt: alt.to_string(),
    }
}

fn twitter(site: &SiteConfig, title: &str, description: &str, image: &str) -> TwitterCard {
    TwitterCard {
        card: TWITTER_CARD,
        title: title.to_string(),
        description: description.to_string(),
        images: vec![image.to_string()],
        creator: site.twitter_handle.clone(),
    }
}

/// Stripped title and the description to use for an item: its stripped
/// excerpt, or the site description when that comes out empty.
fn title_and_description(site: &SiteConfig, title: &str, excerpt: &str) -> (String, String) {
    let clean_title = strip_markup(title).trim().to_string();
    let clean_excerpt = strip_markup(excerpt).trim().to_string();
    let description = if clean_excerpt.is_empty() {
        site.description.clone()
    } else {
        clean_excerpt
    };
    (clean_title, description)
}

/// Site keywords plus the lowercase words of the title longer than three
/// characters.
fn post_keywords(site: &SiteConfig, clean_title: &str) -> Vec<String> {
    site.keywords
        .iter()
        .cloned()
        .chain(
            clean_title
                .to_lowercase()
                .split(' ')
                .filter(|word| word.chars().count() > 3)
                .map(String::from),
        )
        .collect()
}

pub fn home_metadata(site: &SiteConfig) -> PageMetadata {
    let image = site.absolute(&site.og_image);
    PageMetadata {
        title: site.name.clone(),
        description: site.description.clone(),
        keywords: site.keywords.clone(),
        authors: vec![site.name.clone()],
        creator: Some(site.name.clone()),
        publisher: Some(site.name.clone()),
        metadata_base: site.url.clone(),
        canonical: None,
        open_graph: OpenGraph {
            kind: OgType::Website,
            locale: site.locale.clone(),
            url: site.url.clone(),
            title: site.name.clone(),
            description: site.description.clone(),
            site_name: site.name.clone(),
            images: vec![og_image(image.clone(), &site.name)],
            article: None,
        },
        twitter: twitter(site, &site.name, &site.description, &image),
        robots: Some(Robots::open()),
    }
}

pub fn blog_metadata(site: &SiteConfig) -> PageMetadata {
    let title = format!("Blog - {}", site.name);
    let description = "Discover the latest coding tutorials, tips, and insights to level up \
                       your development skills."
        .to_string();
    let image = site.absolute(&site.og_image);
    let mut keywords = site.keywords.clone();
    keywords.extend(["blog", "articles", "posts"].map(String::from));

    PageMetadata {
        title: title.clone(),
        description: description.clone(),
        keywords,
        authors: Vec::new(),
        creator: None,
        publisher: None,
        metadata_base: site.url.clone(),
        canonical: None,
        open_graph: OpenGraph {
            kind: OgType::Website,
            locale: site.locale.clone(),
            url: site.absolute("/blog"),
            title: title.clone(),
            description: description.clone(),
            site_name: site.name.clone(),
            images: vec![og_image(image.clone(), &title)],
            article: None,
        },
        twitter: twitter(site, &title, &description, &image),
        robots: None,
    }
}

pub fn post_metadata(site: &SiteConfig, post: &Post) -> PageMetadata {
    let (clean_title, description) =
        title_and_description(site, &post.title.rendered, &post.excerpt.rendered);
    let url = site.post_url(&post.slug);
    let keywords = post_keywords(site, &clean_title);
    let image = post
        .featured_image()
        .map(|src| site.absolute(src))
        .unwrap_or_else(|| site.absolute(&site.og_image));

    PageMetadata {
        title: format!("{} - {}", clean_title, site.name),
        description: description.clone(),
        keywords: keywords.clone(),
        authors: vec![site.team_name.clone()],
        creator: Some(site.name.clone()),
        publisher: Some(site.name.clone()),
        metadata_base: site.url.clone(),
        canonical: Some(url.clone()),
        open_graph: OpenGraph {
            kind: OgType::Article,
            locale: site.locale.clone(),
            url,
            title: clean_title.clone(),
            description: description.clone(),
            site_name: site.name.clone(),
            images: vec![og_image(image.clone(), &clean_title)],
            article: Some(ArticleMeta {
                published_time: post.date,
                modified_time: post.modified,
                authors: vec![site.name.clone()],
                section: site.section.clone(),
                tags: keywords,
            }),
        },
        twitter: twitter(site, &clean_title, &description, &image),
        robots: Some(Robots::open()),
    }
}

pub fn page_metadata(site: &SiteConfig, page: &Page) -> PageMetadata {
    let (clean_title, description) =
        title_and_description(site, &page.title.rendered, &page.excerpt.rendered);
    let url = site.page_url(&page.slug);
    let image = site.absolute(&site.og_image);

    PageMetadata {
        title: format!("{} - {}", clean_title, site.name),
        description: description.clone(),
        keywords: site.keywords.clone(),
        authors: vec![site.name.clone()],
        creator: Some(site.name.clone()),
        publisher: Some(site.name.clone()),
        metadata_base: site.url.clone(),
        canonical: Some(url.clone()),
        open_graph: OpenGraph {
            kind: OgType::Website,
            locale: site.locale.clone(),
            url,
            title: clean_title.clone(),
            description: description.clone(),
            site_name: site.name.clone(),
            images: vec![og_image(image.clone(), &clean_title)],
            article: None,
        },
        twitter: twitter(site, &clean_title, &description, &image),
        robots: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn site() -> SiteConfig {
        SiteConfig::default().with_url("https://blog.example.com")
    }

    fn post(title: &str, excerpt: &str) -> Post {
        serde_json::from_value(json!({
            "id": 1,
            "date": "2024-05-01T12:00:00",
            "modified": "2024-05-03T08:15:00",
            "slug": "borrow-checker",
            "title": { "rendered": title },
            "excerpt": { "rendered": excerpt, "protected": false },
            "content": { "rendered": "<p>body</p>", "protected": false }
        }))
        .unwrap()
    }

    #[test]
    fn test_post_title_and_canonical() {
        let meta = post_metadata(&site(), &post("<em>Taming</em> the Borrow Checker", "<p>Intro</p>"));
        assert_eq!(meta.title, "Taming the Borrow Checker - The Vibe Code");
        assert_eq!(meta.description, "Intro");
        assert_eq!(
            meta.canonical.as_deref(),
            Some("https://blog.example.com/blog/borrow-checker")
        );
        assert_eq!(meta.open_graph.kind, OgType::Article);
        assert_eq!(meta.open_graph.title, "Taming the Borrow Checker");
        assert_eq!(meta.twitter.card, "summary_large_image");
        assert_eq!(meta.twitter.creator, "@thevibecode");
    }

    #[test]
    fn test_empty_excerpt_falls_back_to_site_description() {
        let site = site();
        let meta = post_metadata(&site, &post("Title", "<p>  </p>"));
        assert_eq!(meta.description, site.description);
        assert_eq!(meta.open_graph.description, site.description);
    }

    #[test]
    fn test_post_keywords_include_long_title_words() {
        let site = site();
        let meta = post_metadata(&site, &post("Taming the Borrow Checker", ""));
        let extra = &meta.keywords[site.keywords.len()..];
        assert_eq!(extra, ["taming", "borrow", "checker"]);
        let article = meta.open_graph.article.unwrap();
        assert_eq!(article.tags, meta.keywords);
        assert_eq!(article.section, "Technology");
    }

    #[test]
    fn test_post_uses_site_image_without_featured_media() {
        let meta = post_metadata(&site(), &post("Title", ""));
        assert_eq!(meta.open_graph.images[0].url, "https://blog.example.com/og-image.jpg");
        assert_eq!(meta.open_graph.images[0].width, 1200);
        assert_eq!(meta.open_graph.images[0].height, 630);
    }

    #[test]
    fn test_home_and_blog() {
        let site = site();
        let home = home_metadata(&site);
        assert_eq!(home.title, "The Vibe Code");
        assert!(home.robots.is_some());

        let blog = blog_metadata(&site);
        assert_eq!(blog.title, "Blog - The Vibe Code");
        assert_eq!(blog.open_graph.url, "https://blog.example.com/blog");
        assert!(blog.keywords.iter().any(|k| k == "articles"));
    }

    #[test]
    fn test_serialized_robots_shape() {
        let value = serde_json::to_value(home_metadata(&site())).unwrap();
        assert_eq!(value["robots"]["googleBot"]["max-image-preview"], "large");
        assert_eq!(value["open_graph"]["type"], "website");
    }
}
