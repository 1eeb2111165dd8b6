//! Pagination feature of a [`Table`](crate::Table).
//!
//! # Components
//!
//! - [`mutator`]: `set_*`/`reset_*` operations. Every write resolves an
//!   [`Updater`](tabula_model::Updater), normalizes the result and publishes it
//!   through the host's change callback
//! - [`auto_reset`]: page index reset when the upstream row set is rebuilt
//! - [`accessors`]: page options and previous/next navigation
//! - [`row_model`]: memoized paginated row model and row pass-throughs

pub mod accessors;
pub mod auto_reset;
pub mod mutator;
pub mod row_model;

pub use auto_reset::ResetRegistration;
