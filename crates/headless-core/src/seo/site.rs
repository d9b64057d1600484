use serde::{Deserialize, Serialize};

/// Identity of the site every page's metadata is attributed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    /// Fallback description for pages whose excerpt is empty.
    pub description: String,
    /// Public base URL without a trailing slash.
    pub url: String,
    pub og_image: String,
    pub twitter_handle: String,
    pub keywords: Vec<String>,
    pub locale: String,
    /// Open Graph article section for posts.
    pub section: String,
    /// Byline used for post authorship.
    pub team_name: String,
}

impl SiteConfig {
    pub const DEFAULT_URL: &'static str = "http://localhost:3000";

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let url = std::env::var("SITE_URL").unwrap_or_else(|_| Self::DEFAULT_URL.to_string());
        Self::default().with_url(url)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Absolute URL for a site path such as `/blog/my-post`.
    pub fn absolute(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }

    pub fn post_url(&self, slug: &str) -> String {
        format!("{}/blog/{}", self.url, slug)
    }

    pub fn page_url(&self, slug: &str) -> String {
        format!("{}/{}", self.url, slug)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "The Vibe Code".to_string(),
            description: "Your ultimate destination for coding tutorials, tips, and insights. \
                          Join the vibe and level up your development skills."
                .to_string(),
            url: Self::DEFAULT_URL.to_string(),
            og_image: "/og-image.jpg".to_string(),
            twitter_handle: "@thevibecode".to_string(),
            keywords: [
                "coding",
                "programming",
                "web development",
                "tutorials",
                "javascript",
                "react",
                "nextjs",
                "typescript",
                "tech blog",
                "developer resources",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            locale: "en_US".to_string(),
            section: "Technology".to_string(),
            team_name: "The Vibe Code Team".to_string(),
        }
    }
}
