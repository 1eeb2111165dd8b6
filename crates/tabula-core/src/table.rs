//! Table instance.
//!
//! A [`Table`] binds a host to its options and owns the per-instance caches
//! and lifecycle state of the pagination feature. The pagination operations
//! themselves live in [`crate::pagination`].

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use tabula_common::Memo;
use tabula_model::{PaginationState, RowModel};

use crate::host::{TableHost, TableStore, make_state_updater};
use crate::options::{PaginateRowsFn, TableOptions};
use crate::pagination::ResetRegistration;

/// Dependency tuple of the paginated row model.
pub(crate) type PaginationDeps<T> = (
    Arc<PaginationState>,
    Arc<RowModel<T>>,
    Option<PaginateRowsFn<T>>,
);

pub struct Table<T> {
    pub(crate) host: Rc<dyn TableHost<T>>,
    pub(crate) options: TableOptions<T>,
    pub(crate) page_index_reset: Cell<ResetRegistration>,
    pub(crate) page_options: Memo<(i64, i64), Arc<Vec<i64>>>,
    pub(crate) pagination_row_model: Memo<PaginationDeps<T>, Arc<RowModel<T>>>,
}

impl<T: 'static> Table<T> {
    pub fn new(host: Rc<dyn TableHost<T>>, options: TableOptions<T>) -> Self {
        let debug = options.debug;
        Self {
            host,
            options,
            page_index_reset: Cell::new(ResetRegistration::default()),
            page_options: Memo::new("page_options").with_debug(debug),
            pagination_row_model: Memo::new("pagination_row_model").with_debug(debug),
        }
    }

    /// Creates a table backed by a fresh [`TableStore`].
    ///
    /// The store is seeded with the configured initial pagination, clamped into
    /// range. When no change callback is configured, one committing into the
    /// store is installed.
    pub fn in_memory(rows: RowModel<T>, mut options: TableOptions<T>) -> (Self, Rc<TableStore<T>>) {
        let seed = options.initial_state.pagination.unwrap_or_default().normalized();
        let store = Rc::new(TableStore::new(rows).with_pagination(seed));
        if options.on_pagination_change.is_none() {
            options.on_pagination_change = Some(make_state_updater(&store));
        }
        let host: Rc<dyn TableHost<T>> = store.clone();
        (Self::new(host, options), store)
    }

    pub fn options(&self) -> &TableOptions<T> {
        &self.options
    }

    /// Replaces the options. Cached derivations stay valid unless one of
    /// their dependencies (such as `paginate_rows_fn`) changed.
    pub fn set_options(&mut self, options: TableOptions<T>) {
        self.page_options.set_debug(options.debug);
        self.pagination_row_model.set_debug(options.debug);
        self.options = options;
    }

    /// Current pagination state as published by the host.
    pub fn get_pagination_state(&self) -> Arc<PaginationState> {
        self.host.pagination()
    }

    /// Pagination restored by `reset_pagination`.
    pub fn initial_pagination(&self) -> PaginationState {
        self.options.initial_state.pagination.unwrap_or_default()
    }

    pub fn get_expanded_row_model(&self) -> Arc<RowModel<T>> {
        self.host.expanded_row_model()
    }

    pub fn get_pre_expanded_row_model(&self) -> Arc<RowModel<T>> {
        self.host.pre_expanded_row_model()
    }
}

impl<T> fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("pagination", &self.host.pagination())
            .field("options", &self.options)
            .field("page_index_reset", &self.page_index_reset.get())
            .finish_non_exhaustive()
    }
}
