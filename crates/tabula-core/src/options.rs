//! Host-supplied table options.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use tabula_model::{PaginationConfig, PaginationState, RowModel, Updater};

use crate::table::Table;

/// Publication callback receiving `(updater, previewed_new_value)`.
pub type OnChangeFn<S> = Rc<dyn Fn(Updater<S>, S)>;

/// External pagination strategy computing the paginated row model.
pub type PaginateRowsFn<T> = Rc<dyn Fn(&Table<T>, &Arc<RowModel<T>>) -> Arc<RowModel<T>>>;

/// Seed values used by the reset operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InitialState {
    pub pagination: Option<PaginationState>,
}

/// Options recognized by the pagination feature.
pub struct TableOptions<T> {
    /// Global override for all auto-reset features.
    pub auto_reset_all: Option<bool>,
    /// Reset the page index when the upstream row set is rebuilt.
    pub auto_reset_page_index: bool,
    /// External pagination strategy. When absent the paginated row model is
    /// the pre-pagination model and the page count is computed internally.
    pub paginate_rows_fn: Option<PaginateRowsFn<T>>,
    /// Where new pagination state is published. When absent updates are dropped.
    pub on_pagination_change: Option<OnChangeFn<PaginationState>>,
    pub initial_state: InitialState,
    /// Log recomputation of derived values.
    pub debug: bool,
}

impl<T> Default for TableOptions<T> {
    fn default() -> Self {
        Self {
            auto_reset_all: None,
            auto_reset_page_index: true,
            paginate_rows_fn: None,
            on_pagination_change: None,
            initial_state: InitialState::default(),
            debug: false,
        }
    }
}

impl<T> Clone for TableOptions<T> {
    fn clone(&self) -> Self {
        Self {
            auto_reset_all: self.auto_reset_all,
            auto_reset_page_index: self.auto_reset_page_index,
            paginate_rows_fn: self.paginate_rows_fn.clone(),
            on_pagination_change: self.on_pagination_change.clone(),
            initial_state: self.initial_state,
            debug: self.debug,
        }
    }
}

impl<T> fmt::Debug for TableOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableOptions")
            .field("auto_reset_all", &self.auto_reset_all)
            .field("auto_reset_page_index", &self.auto_reset_page_index)
            .field("paginate_rows_fn", &self.paginate_rows_fn.is_some())
            .field("on_pagination_change", &self.on_pagination_change.is_some())
            .field("initial_state", &self.initial_state)
            .field("debug", &self.debug)
            .finish()
    }
}

impl<T> TableOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps stored configuration onto options. Callbacks are left unset.
    pub fn from_config(config: &PaginationConfig) -> Self {
        Self {
            auto_reset_all: config.auto_reset_all,
            auto_reset_page_index: config.auto_reset_page_index,
            initial_state: InitialState {
                pagination: config.initial_pagination,
            },
            debug: config.debug,
            ..Self::default()
        }
    }

    pub fn with_auto_reset_all(mut self, enabled: bool) -> Self {
        self.auto_reset_all = Some(enabled);
        self
    }

    pub fn with_auto_reset_page_index(mut self, enabled: bool) -> Self {
        self.auto_reset_page_index = enabled;
        self
    }

    pub fn with_paginate_rows_fn<F>(mut self, paginate: F) -> Self
    where
        F: Fn(&Table<T>, &Arc<RowModel<T>>) -> Arc<RowModel<T>> + 'static,
    {
        self.paginate_rows_fn = Some(Rc::new(paginate));
        self
    }

    /// Installs an already shared strategy, keeping its identity.
    pub fn with_shared_paginate_rows_fn(mut self, paginate: PaginateRowsFn<T>) -> Self {
        self.paginate_rows_fn = Some(paginate);
        self
    }

    pub fn with_on_pagination_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(Updater<PaginationState>, PaginationState) + 'static,
    {
        self.on_pagination_change = Some(Rc::new(on_change));
        self
    }

    pub fn with_initial_pagination(mut self, pagination: PaginationState) -> Self {
        self.initial_state.pagination = Some(pagination);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
