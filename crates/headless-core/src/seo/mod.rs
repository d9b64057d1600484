//! Document-head metadata derived from content items.
//!
//! Everything here is a pure function of a [`SiteConfig`] and, for item
//! pages, the post or page being shown.

mod markup;
mod metadata;
mod site;
mod structured_data;

pub use markup::{WORDS_PER_MINUTE, reading_time, snippet, strip_markup};
pub use metadata::{
    ArticleMeta, GoogleBot, OgImage, OgType, OpenGraph, PageMetadata, Robots, TwitterCard,
    blog_metadata, home_metadata, page_metadata, post_metadata,
};
pub use site::SiteConfig;
pub use structured_data::{
    BlogPosting, Organization, SearchAction, WebPageRef, WebSite, post_json_ld, website_json_ld,
};
