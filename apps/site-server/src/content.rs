//! Degradation of content-source failures for the page routes.
//!
//! A page never fails because the content API did: list fetches fall back
//! to an empty page and single lookups to "not found". The failure is
//! logged here so handlers don't have to, and the response carries
//! [`UNAVAILABLE_NOTICE`] so a renderer can tell "no posts" from "no API".

use headless_core::ContentError;
use headless_core::domain::Paginated;
use headless_shared::ApiResponse;

pub const UNAVAILABLE_NOTICE: &str = "Content is temporarily unavailable";

pub trait Degrade {
    type Output;

    /// Swallow a fetch failure, logging it.
    fn degrade(self) -> Self::Output;
}

impl<T> Degrade for Result<Paginated<T>, ContentError> {
    type Output = Paginated<T>;

    fn degrade(self) -> Paginated<T> {
        self.unwrap_or_else(|e| {
            log_failure(&e);
            Paginated::empty()
        })
    }
}

impl<T> Degrade for Result<Option<T>, ContentError> {
    type Output = Option<T>;

    fn degrade(self) -> Option<T> {
        self.unwrap_or_else(|e| {
            log_failure(&e);
            None
        })
    }
}

pub trait DegradedNotice {
    fn noting_degraded(self, degraded: bool) -> Self;
}

impl<T> DegradedNotice for ApiResponse<T> {
    fn noting_degraded(self, degraded: bool) -> Self {
        if degraded {
            self.with_message(UNAVAILABLE_NOTICE)
        } else {
            self
        }
    }
}

fn log_failure(err: &ContentError) {
    let operation = err.operation().map(|op| op.as_str()).unwrap_or("unknown");
    tracing::error!(operation, error = %err, "Content fetch failed, degrading");
}

#[cfg(test)]
mod tests {
    use super::*;
    use headless_core::ports::Operation;

    #[test]
    fn test_failed_list_becomes_default_page() {
        let result: Result<Paginated<u64>, ContentError> =
            Err(ContentError::fetch_failed(Operation::ListPosts, "timed out"));
        let page = result.degrade();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_failed_lookup_becomes_none() {
        let result: Result<Option<u64>, ContentError> =
            Err(ContentError::fetch_failed(Operation::PostBySlug, "500"));
        assert_eq!(result.degrade(), None);
    }

    #[test]
    fn test_notice_only_when_degraded() {
        let fine = ApiResponse::ok(()).noting_degraded(false);
        assert!(fine.message.is_none());

        let degraded = ApiResponse::ok(()).noting_degraded(true);
        assert_eq!(degraded.message.as_deref(), Some(UNAVAILABLE_NOTICE));
    }

    #[test]
    fn test_success_passes_through() {
        let result: Result<Option<u64>, ContentError> = Ok(Some(7));
        assert_eq!(result.degrade(), Some(7));
    }
}
