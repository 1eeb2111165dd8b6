//! Shared utilities for tabula crates.
//!
//! This crate provides the dependency-tracked memoization used by the
//! derived accessors of a table instance.

pub mod memo;

// Re-export commonly used types at crate root for convenience
pub use memo::{DepKey, Memo};
