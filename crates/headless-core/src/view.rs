//! View state for consumers that fetch content while the user navigates.
//!
//! Every fetch is tagged with a [`RequestToken`]. A result is only applied if
//! its token is still the current one; anything started before a newer fetch
//! or before [`ViewState::cancel`] is dropped on arrival.
//!
//! The site server keeps one for its content API health check, so
//! overlapping checks cannot report an outdated result. Client-side
//! renderers use it per view (listing, search box) the same way.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Identifies one fetch started through a [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    /// A newer fetch started or the view was cancelled.
    Stale,
}

#[derive(Debug)]
struct Inner<T> {
    generation: u64,
    loading: bool,
    value: Option<T>,
}

/// Loading flag plus the last applied value of one view.
#[derive(Debug)]
pub struct ViewState<T> {
    inner: Mutex<Inner<T>>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                generation: 0,
                loading: false,
                value: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a fetch. Any fetch still in flight becomes stale.
    pub fn begin(&self) -> RequestToken {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.loading = true;
        RequestToken(inner.generation)
    }

    /// Apply a fetch result if `token` is still current.
    pub fn complete(&self, token: RequestToken, value: T) -> Applied {
        let mut inner = self.lock();
        if token.0 != inner.generation {
            return Applied::Stale;
        }
        inner.value = Some(value);
        inner.loading = false;
        Applied::Current
    }

    /// End the current fetch without a value (e.g. it failed).
    pub fn abandon(&self, token: RequestToken) -> Applied {
        let mut inner = self.lock();
        if token.0 != inner.generation {
            return Applied::Stale;
        }
        inner.loading = false;
        Applied::Current
    }

    /// The view went away: every outstanding token becomes stale.
    pub fn cancel(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.lock().generation == token.0
    }
}

impl<T: Clone> ViewState<T> {
    pub fn value(&self) -> Option<T> {
        self.lock().value.clone()
    }
}
