//! # Headless Shared
//!
//! View models exchanged between the page handlers and whatever renders them.
//! Nothing here knows about the content API; handlers fill these in.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse, PageInfo};
