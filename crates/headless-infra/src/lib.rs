//! # Headless Infrastructure
//!
//! Concrete implementations of the ports defined in `headless-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `wordpress` - WordPress REST API client via reqwest

pub mod config;
pub mod memory;

#[cfg(feature = "wordpress")]
pub mod wordpress;

pub use config::ContentApiConfig;
pub use memory::InMemoryContent;

#[cfg(feature = "wordpress")]
pub use wordpress::WordPressClient;
