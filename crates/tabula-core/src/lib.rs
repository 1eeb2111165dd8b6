//! Table pagination feature.
//!
//! This crate owns the pagination behaviour of a table instance: mutating the
//! page position with clamping and reset semantics, resetting the page index
//! when the upstream row set is rebuilt, and deriving the paginated row model
//! from the pre-pagination (sorted/filtered/expanded) rows.
//!
//! The table never holds canonical state itself. It reads pagination state
//! and upstream row models from a [`TableHost`] and publishes every change
//! through the `on_pagination_change` callback of its [`TableOptions`].
//! [`TableStore`] is a ready-made in-memory host.
//!
//! # Example
//!
//! ```
//! use tabula_core::{Table, TableOptions};
//! use tabula_model::RowModel;
//!
//! let (table, _store) = Table::in_memory(RowModel::from_records(0..95), TableOptions::new());
//!
//! table.set_page_index(4);
//! assert_eq!(table.get_pagination_state().page_count, 10);
//!
//! table.set_page_size(20);
//! let state = table.get_pagination_state();
//! assert_eq!((state.page_index, state.page_count), (2, 5));
//! ```

pub mod host;
pub mod options;
pub mod paginate;
pub mod pagination;
pub mod table;

pub use host::{TableHost, TableStore, make_state_updater};
pub use options::{InitialState, OnChangeFn, PaginateRowsFn, TableOptions};
pub use paginate::paginate_rows;
pub use pagination::ResetRegistration;
pub use table::Table;
