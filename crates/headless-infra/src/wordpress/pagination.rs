//! Paging totals reported in response headers.

use headless_core::domain::Paginated;
use reqwest::header::HeaderMap;

pub const TOTAL_PAGES_HEADER: &str = "x-wp-totalpages";
pub const TOTAL_HEADER: &str = "x-wp-total";

/// `x-wp-totalpages` and `x-wp-total` of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub total_pages: u32,
    pub total: u64,
}

impl Totals {
    /// A header that is missing or not an integer takes its default:
    /// one page, zero items.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            total_pages: parse_or(
                header_str(headers, TOTAL_PAGES_HEADER),
                Paginated::<()>::DEFAULT_TOTAL_PAGES,
            ),
            total: parse_or(
                header_str(headers, TOTAL_HEADER),
                Paginated::<()>::DEFAULT_TOTAL,
            ),
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn parse_or<T: std::str::FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_reads_both_headers() {
        let totals = Totals::from_headers(&headers(&[
            ("x-wp-totalpages", "7"),
            ("x-wp-total", "64"),
        ]));
        assert_eq!(totals, Totals { total_pages: 7, total: 64 });
    }

    #[test]
    fn test_missing_headers_default() {
        let totals = Totals::from_headers(&HeaderMap::new());
        assert_eq!(totals, Totals { total_pages: 1, total: 0 });
    }

    #[test]
    fn test_non_numeric_headers_default() {
        let totals = Totals::from_headers(&headers(&[
            ("x-wp-totalpages", "many"),
            ("x-wp-total", "-3"),
        ]));
        assert_eq!(totals, Totals { total_pages: 1, total: 0 });
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let totals = Totals::from_headers(&headers(&[("x-wp-totalpages", " 3 ")]));
        assert_eq!(totals.total_pages, 3);
    }
}
