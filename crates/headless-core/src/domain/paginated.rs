use serde::{Deserialize, Serialize};

/// One page of a list endpoint plus the totals the API reports in its
/// `x-wp-totalpages` and `x-wp-total` headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
    pub total: u64,
}

impl<T> Paginated<T> {
    pub const DEFAULT_TOTAL_PAGES: u32 = 1;
    pub const DEFAULT_TOTAL: u64 = 0;

    pub fn new(items: Vec<T>, total_pages: u32, total: u64) -> Self {
        Self {
            items,
            total_pages,
            total,
        }
    }

    /// An empty result with the same totals a missing header would produce.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Self::DEFAULT_TOTAL_PAGES, Self::DEFAULT_TOTAL)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            total: self.total,
        }
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self::empty()
    }
}
