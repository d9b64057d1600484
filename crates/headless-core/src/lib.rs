//! # Headless Core
//!
//! The domain layer of the headless blog.
//! This crate holds the content model mirrored from the remote content API,
//! the query filters and the `ContentSource` port, and the pure metadata
//! helpers used to build document heads. It performs no I/O.

pub mod domain;
pub mod error;
pub mod ports;
pub mod query;
pub mod seo;
pub mod view;

pub use error::ContentError;
