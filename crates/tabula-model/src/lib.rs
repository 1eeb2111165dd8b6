//! Value types for table pagination.
//!
//! # Module Organization
//!
//! - [`pagination`]: Pagination state and its invariants
//! - [`updater`]: Literal-or-function state updates
//! - [`row`]: Rows and row models produced by the upstream pipeline
//! - [`config`]: Serializable pagination configuration
//! - [`error`]: Configuration errors

pub mod config;
pub mod error;
pub mod pagination;
pub mod row;
pub mod updater;

pub use config::PaginationConfig;
pub use error::{ConfigError, Result};
pub use pagination::{
    DEFAULT_PAGE_SIZE, PaginationState, UNKNOWN_PAGE_COUNT, default_pagination_state,
    page_count_for,
};
pub use row::{Row, RowModel};
pub use updater::Updater;
