//! WordPress REST API client.

mod client;
mod pagination;

#[cfg(test)]
mod tests;

pub use client::WordPressClient;
pub use pagination::{TOTAL_HEADER, TOTAL_PAGES_HEADER, Totals};
