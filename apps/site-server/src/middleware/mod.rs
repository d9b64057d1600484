//! Middleware and cross-cutting concerns.

pub mod error;

pub use error::{AppError, AppResult};
