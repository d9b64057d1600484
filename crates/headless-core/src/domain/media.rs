use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Links, Rendered, Title};

/// An uploaded attachment from the `/media` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    pub id: u64,
    #[serde(default)]
    pub date: Option<NaiveDateTime>,
    #[serde(default)]
    pub modified: Option<NaiveDateTime>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: Title,
    #[serde(default)]
    pub author: u64,
    #[serde(default)]
    pub caption: Rendered,
    #[serde(default)]
    pub description: Rendered,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub media_details: MediaDetails,
    #[serde(default)]
    pub source_url: String,
    #[serde(default, rename = "_links")]
    pub links: Links,
}

/// Dimensions of the original upload and its generated size variants.
/// Non-image attachments carry no dimensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaDetails {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub sizes: BTreeMap<String, MediaSize>,
}

/// One rendered size variant (`thumbnail`, `medium`, `full`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSize {
    #[serde(default)]
    pub file: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub mime_type: String,
    pub source_url: String,
}

impl Media {
    /// The smallest variant at least `min_width` wide, or the original upload.
    pub fn best_fit(&self, min_width: u32) -> &str {
        self.media_details
            .sizes
            .values()
            .filter(|size| size.width >= min_width)
            .min_by_key(|size| size.width)
            .map(|size| size.source_url.as_str())
            .unwrap_or(&self.source_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media() -> Media {
        serde_json::from_value(serde_json::json!({
            "id": 9,
            "slug": "cover",
            "media_type": "image",
            "mime_type": "image/jpeg",
            "alt_text": "A cover",
            "source_url": "https://example.com/cover.jpg",
            "media_details": {
                "width": 2000,
                "height": 1000,
                "file": "cover.jpg",
                "sizes": {
                    "thumbnail": {
                        "file": "cover-150x150.jpg", "width": 150, "height": 150,
                        "mime_type": "image/jpeg", "source_url": "https://example.com/cover-150x150.jpg"
                    },
                    "large": {
                        "file": "cover-1024x512.jpg", "width": 1024, "height": 512,
                        "mime_type": "image/jpeg", "source_url": "https://example.com/cover-1024x512.jpg"
                    }
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_best_fit_prefers_smallest_wide_enough_variant() {
        let m = media();
        assert_eq!(m.best_fit(600), "https://example.com/cover-1024x512.jpg");
        assert_eq!(m.best_fit(100), "https://example.com/cover-150x150.jpg");
        assert_eq!(m.best_fit(1500), "https://example.com/cover.jpg");
    }

    #[test]
    fn test_best_fit_without_variants_is_the_upload() {
        let mut m = media();
        m.media_details.sizes.clear();
        assert_eq!(m.best_fit(300), "https://example.com/cover.jpg");
    }
}
