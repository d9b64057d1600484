//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod content;

pub use content::{ContentSource, Operation};
