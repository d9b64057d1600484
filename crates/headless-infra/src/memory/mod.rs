//! In-memory content source - used for tests and for running without a
//! content API.

use async_trait::async_trait;

use headless_core::ContentError;
use headless_core::domain::{Author, Category, Media, Page, Paginated, Post, SearchResult, Tag};
use headless_core::ports::ContentSource;
use headless_core::query::{
    AuthorQuery, CategoryQuery, MediaQuery, Order, PageQuery, PostQuery, SearchQuery, TagQuery,
};
use headless_core::seo::strip_markup;

/// Page size the remote API uses when `per_page` is not given.
const DEFAULT_PER_PAGE: u32 = 10;

/// Serves a fixed set of content with the remote API's paging and filtering
/// rules applied in memory.
///
/// Note: content is supplied at construction and never changes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContent {
    posts: Vec<Post>,
    pages: Vec<Page>,
    categories: Vec<Category>,
    tags: Vec<Tag>,
    media: Vec<Media>,
    authors: Vec<Author>,
}

impl InMemoryContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    pub fn with_pages(mut self, pages: Vec<Page>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_media(mut self, media: Vec<Media>) -> Self {
        self.media = media;
        self
    }

    pub fn with_authors(mut self, authors: Vec<Author>) -> Self {
        self.authors = authors;
        self
    }
}

/// Case-insensitive match of `needle` against the stripped markup.
fn mentions(haystack: &str, needle: &str) -> bool {
    strip_markup(haystack)
        .to_lowercase()
        .contains(&needle.to_lowercase())
}

fn paginate<T: Clone>(items: Vec<&T>, page: Option<u32>, per_page: Option<u32>) -> Paginated<T> {
    let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE).max(1) as usize;
    let page = page.unwrap_or(1).max(1) as usize;
    let total = items.len();
    let total_pages = total.div_ceil(per_page).max(1);

    let items = items
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .cloned()
        .collect();

    Paginated::new(items, total_pages as u32, total as u64)
}

fn allowed(id: u64, include: Option<&[u64]>, exclude: Option<&[u64]>) -> bool {
    include.is_none_or(|ids| ids.contains(&id)) && !exclude.is_some_and(|ids| ids.contains(&id))
}

#[async_trait]
impl ContentSource for InMemoryContent {
    async fn list_posts(&self, query: &PostQuery) -> Result<Paginated<Post>, ContentError> {
        let mut matches: Vec<&Post> = self
            .posts
            .iter()
            .filter(|p| query.status.as_deref().is_none_or(|s| p.status == s))
            .filter(|p| query.author.is_none_or(|a| p.author == a))
            .filter(|p| {
                query
                    .categories
                    .as_deref()
                    .is_none_or(|ids| ids.iter().any(|id| p.categories.contains(id)))
            })
            .filter(|p| {
                query
                    .tags
                    .as_deref()
                    .is_none_or(|ids| ids.iter().any(|id| p.tags.contains(id)))
            })
            .filter(|p| {
                query.search.as_deref().is_none_or(|s| {
                    mentions(&p.title.rendered, s)
                        || mentions(&p.content.rendered, s)
                        || mentions(&p.excerpt.rendered, s)
                })
            })
            .collect();

        matches.sort_by(|a, b| b.date.cmp(&a.date));
        if query.order == Some(Order::Asc) {
            matches.reverse();
        }

        Ok(paginate(matches, query.page, query.per_page))
    }

    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>, ContentError> {
        Ok(self.posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn get_post_by_id(&self, id: u64) -> Result<Option<Post>, ContentError> {
        Ok(self.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn list_pages(&self, query: &PageQuery) -> Result<Paginated<Page>, ContentError> {
        let mut matches: Vec<&Page> = self
            .pages
            .iter()
            .filter(|p| query.parent.is_none_or(|parent| p.parent == Some(parent)))
            .filter(|p| query.status.as_deref().is_none_or(|s| p.status == s))
            .filter(|p| {
                query
                    .search
                    .as_deref()
                    .is_none_or(|s| mentions(&p.title.rendered, s) || mentions(&p.content.rendered, s))
            })
            .collect();

        matches.sort_by_key(|p| p.menu_order);
        if query.order == Some(Order::Desc) {
            matches.reverse();
        }

        Ok(paginate(matches, query.page, query.per_page))
    }

    async fn get_page_by_slug(&self, slug: &str) -> Result<Option<Page>, ContentError> {
        Ok(self.pages.iter().find(|p| p.slug == slug).cloned())
    }

    async fn list_categories(
        &self,
        query: &CategoryQuery,
    ) -> Result<Paginated<Category>, ContentError> {
        let matches: Vec<&Category> = self
            .categories
            .iter()
            .filter(|c| allowed(c.id, query.include.as_deref(), query.exclude.as_deref()))
            .filter(|c| !(query.hide_empty == Some(true) && c.count == 0))
            .filter(|c| query.parent.is_none_or(|parent| c.parent == Some(parent)))
            .filter(|c| query.search.as_deref().is_none_or(|s| mentions(&c.name, s)))
            .collect();

        Ok(paginate(matches, query.page, query.per_page))
    }

    async fn list_tags(&self, query: &TagQuery) -> Result<Paginated<Tag>, ContentError> {
        let matches: Vec<&Tag> = self
            .tags
            .iter()
            .filter(|t| allowed(t.id, query.include.as_deref(), query.exclude.as_deref()))
            .filter(|t| !(query.hide_empty == Some(true) && t.count == 0))
            .filter(|t| query.search.as_deref().is_none_or(|s| mentions(&t.name, s)))
            .collect();

        Ok(paginate(matches, query.page, query.per_page))
    }

    async fn list_media(&self, query: &MediaQuery) -> Result<Paginated<Media>, ContentError> {
        let matches: Vec<&Media> = self
            .media
            .iter()
            .filter(|m| query.author.is_none_or(|a| m.author == a))
            .filter(|m| query.media_type.as_deref().is_none_or(|t| m.media_type == t))
            .filter(|m| query.mime_type.as_deref().is_none_or(|t| m.mime_type == t))
            .filter(|m| query.search.as_deref().is_none_or(|s| mentions(&m.title.rendered, s)))
            .collect();

        Ok(paginate(matches, query.page, query.per_page))
    }

    async fn get_media_by_id(&self, id: u64) -> Result<Option<Media>, ContentError> {
        Ok(self.media.iter().find(|m| m.id == id).cloned())
    }

    async fn list_authors(&self, query: &AuthorQuery) -> Result<Paginated<Author>, ContentError> {
        let matches: Vec<&Author> = self
            .authors
            .iter()
            .filter(|a| allowed(a.id, query.include.as_deref(), query.exclude.as_deref()))
            .filter(|a| query.search.as_deref().is_none_or(|s| mentions(&a.name, s)))
            .collect();

        Ok(paginate(matches, query.page, query.per_page))
    }

    async fn get_author_by_id(&self, id: u64) -> Result<Option<Author>, ContentError> {
        Ok(self.authors.iter().find(|a| a.id == id).cloned())
    }

    async fn search(
        &self,
        terms: &str,
        query: &SearchQuery,
    ) -> Result<Paginated<SearchResult>, ContentError> {
        let wants = |kind: &str| {
            query
                .kind
                .as_deref()
                .is_none_or(|kinds| kinds.iter().any(|k| k == kind))
        };

        let mut hits: Vec<SearchResult> = Vec::new();
        if wants("post") {
            hits.extend(
                self.posts
                    .iter()
                    .filter(|p| mentions(&p.title.rendered, terms) || mentions(&p.content.rendered, terms))
                    .map(|p| SearchResult {
                        id: p.id,
                        title: p.title.rendered.clone(),
                        url: p.link.clone(),
                        kind: "post".to_string(),
                        subtype: "post".to_string(),
                        links: Default::default(),
                    }),
            );
            hits.extend(
                self.pages
                    .iter()
                    .filter(|p| mentions(&p.title.rendered, terms) || mentions(&p.content.rendered, terms))
                    .map(|p| SearchResult {
                        id: p.id,
                        title: p.title.rendered.clone(),
                        url: p.link.clone(),
                        kind: "post".to_string(),
                        subtype: "page".to_string(),
                        links: Default::default(),
                    }),
            );
        }
        if wants("term") {
            hits.extend(
                self.categories
                    .iter()
                    .filter(|c| mentions(&c.name, terms))
                    .map(|c| SearchResult {
                        id: c.id,
                        title: c.name.clone(),
                        url: c.link.clone(),
                        kind: "term".to_string(),
                        subtype: "category".to_string(),
                        links: Default::default(),
                    }),
            );
        }

        let hits = hits
            .into_iter()
            .filter(|hit| {
                query
                    .subtype
                    .as_deref()
                    .is_none_or(|subtypes| subtypes.iter().any(|s| *s == hit.subtype))
            })
            .collect::<Vec<_>>();

        Ok(paginate(hits.iter().collect(), query.page, query.per_page))
    }

    async fn check_connectivity(&self) -> Result<u16, ContentError> {
        Ok(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post(id: u64, slug: &str, day: u32, categories: &[u64]) -> Post {
        serde_json::from_value(json!({
            "id": id,
            "date": format!("2024-01-{day:02}T08:00:00"),
            "modified": format!("2024-01-{day:02}T08:00:00"),
            "slug": slug,
            "status": "publish",
            "title": { "rendered": format!("Post about {slug}") },
            "content": { "rendered": "<p>content</p>", "protected": false },
            "categories": categories
        }))
        .unwrap()
    }

    fn source() -> InMemoryContent {
        InMemoryContent::new().with_posts(vec![
            post(1, "rust", 1, &[1]),
            post(2, "actix", 2, &[2]),
            post(3, "tokio", 3, &[1, 2]),
        ])
    }

    #[tokio::test]
    async fn test_posts_newest_first_and_paged() {
        let page = source()
            .list_posts(&PostQuery {
                per_page: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 2);
        let slugs: Vec<_> = page.items.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["tokio", "actix"]);
    }

    #[tokio::test]
    async fn test_posts_filtered_by_category_and_search() {
        let source = source();
        let in_rust = source
            .list_posts(&PostQuery {
                categories: Some(vec![1]),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(in_rust.total, 2);

        let found = source
            .list_posts(&PostQuery {
                search: Some("ACTIX".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(found.items.len(), 1);
        assert_eq!(found.items[0].id, 2);
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty() {
        let page = source()
            .list_posts(&PostQuery {
                page: Some(5),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn test_lookup_by_slug() {
        let source = source();
        assert_eq!(source.get_post_by_slug("tokio").await.unwrap().map(|p| p.id), Some(3));
        assert!(source.get_post_by_slug("missing-slug").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_source_reports_one_page() {
        let page = InMemoryContent::new()
            .list_categories(&CategoryQuery::default())
            .await
            .unwrap();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total, 0);
    }
}
