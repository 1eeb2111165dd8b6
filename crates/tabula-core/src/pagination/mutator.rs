//! Pagination state mutation.
//!
//! All operations funnel into [`Table::set_pagination`], which is the only
//! place that talks to the host. It:
//!
//! 1. resolves the caller's updater against the old state
//! 2. recomputes `page_count` from the pre-expanded row count when no
//!    external paginator is configured
//! 3. normalizes the result so the state invariants hold
//! 4. publishes `(updater, preview)` through `on_pagination_change`
//!
//! The same wrapped updater is what the host applies when it commits, so the
//! preview and the committed value agree.

use tabula_model::{DEFAULT_PAGE_SIZE, PaginationState, UNKNOWN_PAGE_COUNT, Updater, page_count_for};

use crate::table::Table;

impl<T: 'static> Table<T> {
    pub fn set_pagination(&self, updater: impl Into<Updater<PaginationState>>) {
        let updater = updater.into();
        let row_count = self
            .options
            .paginate_rows_fn
            .is_none()
            .then(|| self.host.pre_expanded_row_model().len());

        let safe_updater = Updater::from_fn(move |old: &PaginationState| {
            let mut next = updater.apply(old);
            if let Some(row_count) = row_count {
                next.page_count = page_count_for(row_count, next.page_size);
            }
            next.normalized()
        });

        let Some(on_change) = &self.options.on_pagination_change else {
            tracing::trace!("No pagination change handler, update dropped");
            return;
        };

        let preview = safe_updater.apply(&self.host.pagination());
        tracing::trace!(
            page_index = preview.page_index,
            page_size = preview.page_size,
            page_count = preview.page_count,
            "Publishing pagination"
        );
        on_change(safe_updater, preview);
    }

    /// Restores the configured initial pagination, or `{0, 10, -1}`.
    pub fn reset_pagination(&self) {
        self.set_pagination(self.initial_pagination());
    }

    /// Moves to a page, clamped into `0..page_count` (unbounded above while
    /// the count is unknown).
    pub fn set_page_index(&self, updater: impl Into<Updater<i64>>) {
        let updater = updater.into();
        self.set_pagination(Updater::from_fn(move |old: &PaginationState| {
            PaginationState {
                page_index: updater.apply(&old.page_index).clamp(0, old.max_page_index()),
                ..*old
            }
        }));
    }

    pub fn reset_page_index(&self) {
        self.set_page_index(0);
    }

    /// Changes the page size, keeping the top visible row on screen.
    ///
    /// The new index is `floor(old_size * old_index / new_size)`; size and
    /// index are published together.
    pub fn set_page_size(&self, updater: impl Into<Updater<i64>>) {
        let updater = updater.into();
        self.set_pagination(Updater::from_fn(move |old: &PaginationState| {
            let page_size = updater.apply(&old.page_size).max(1);
            let page_index = old.top_row_index().max(0).div_euclid(page_size);
            PaginationState {
                page_index,
                page_size,
                ..*old
            }
        }));
    }

    /// Restores the configured initial page size, or 10.
    pub fn reset_page_size(&self) {
        let page_size = self
            .options
            .initial_state
            .pagination
            .map_or(DEFAULT_PAGE_SIZE, |p| p.page_size);
        self.set_page_size(page_size);
    }

    /// Sets the page count, clamped to at least -1.
    ///
    /// Without an external paginator the count is recomputed from the rows on
    /// publish, so this only sticks when `paginate_rows_fn` is configured.
    pub fn set_page_count(&self, updater: impl Into<Updater<i64>>) {
        let updater = updater.into();
        self.set_pagination(Updater::from_fn(move |old: &PaginationState| {
            PaginationState {
                page_count: updater.apply(&old.page_count).max(UNKNOWN_PAGE_COUNT),
                ..*old
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    use tabula_model::RowModel;

    use crate::{Table, TableHost, TableOptions, TableStore};

    use super::*;

    fn table_with_rows(rows: usize) -> Table<usize> {
        Table::in_memory(RowModel::from_records(0..rows), TableOptions::new()).0
    }

    fn external_table(state: PaginationState) -> Table<usize> {
        let options = TableOptions::new()
            .with_paginate_rows_fn(|_, rows| Arc::clone(rows))
            .with_initial_pagination(state);
        Table::in_memory(RowModel::from_records(0..100), options).0
    }

    #[test]
    fn test_page_count_computed_on_publish() {
        let table = table_with_rows(25);
        assert_eq!(table.get_pagination_state().page_count, -1);

        table.set_page_index(0);
        assert_eq!(table.get_pagination_state().page_count, 3);
    }

    #[test]
    fn test_page_count_zero_without_rows() {
        let table = table_with_rows(0);
        table.set_page_index(3);
        let state = table.get_pagination_state();
        assert_eq!(state.page_count, 0);
        // no upper bound while there are no pages
        assert_eq!(state.page_index, 3);
    }

    #[test]
    fn test_page_index_clamped_into_page_count() {
        let table = external_table(PaginationState::new(0, 10, 5));

        table.set_page_index(-3);
        assert_eq!(table.get_pagination_state().page_index, 0);

        table.set_page_index(9);
        assert_eq!(table.get_pagination_state().page_index, 4);

        table.set_page_index(Updater::from_fn(|old: &i64| old - 1));
        assert_eq!(table.get_pagination_state().page_index, 3);
    }

    #[test]
    fn test_page_index_unbounded_with_unknown_count() {
        let table = external_table(PaginationState::default());
        table.set_page_index(1_000);
        assert_eq!(table.get_pagination_state().page_index, 1_000);
    }

    #[test]
    fn test_page_size_keeps_top_row() {
        let table = external_table(PaginationState::new(2, 10, -1));
        table.set_page_size(7);
        let state = table.get_pagination_state();
        assert_eq!(state.page_size, 7);
        assert_eq!(state.page_index, 2);
    }

    #[test]
    fn test_page_size_raised_to_one() {
        let table = external_table(PaginationState::new(3, 10, -1));
        table.set_page_size(-5);
        let state = table.get_pagination_state();
        assert_eq!(state.page_size, 1);
        assert_eq!(state.page_index, 30);
    }

    #[test]
    fn test_page_count_clamped_to_unknown() {
        let table = external_table(PaginationState::default());
        table.set_page_count(-10);
        assert_eq!(table.get_pagination_state().page_count, -1);

        table.set_page_count(7);
        assert_eq!(table.get_pagination_state().page_count, 7);
    }

    #[test]
    fn test_shrinking_page_count_pulls_index_back() {
        let table = external_table(PaginationState::new(6, 10, 8));
        table.set_page_count(3);
        assert_eq!(*table.get_pagination_state(), PaginationState::new(2, 10, 3));
    }

    #[test]
    fn test_reset_page_size_uses_initial_state() {
        let table = external_table(PaginationState::new(0, 25, -1));
        table.set_page_size(5);
        table.reset_page_size();
        assert_eq!(table.get_pagination_state().page_size, 25);

        let table = table_with_rows(40);
        table.set_page_size(5);
        table.reset_page_size();
        assert_eq!(table.get_pagination_state().page_size, 10);
    }

    #[test]
    fn test_publishes_updater_and_preview() {
        let published: Rc<RefCell<Vec<(PaginationState, PaginationState)>>> = Rc::default();
        let sink = Rc::clone(&published);
        let options = TableOptions::new().with_on_pagination_change(move |updater, preview| {
            let old = PaginationState::new(1, 10, -1);
            sink.borrow_mut().push((updater.apply(&old), preview));
        });
        let (table, store) = Table::in_memory(RowModel::from_records(0..50), options);

        table.set_page_index(4);

        let published = published.borrow();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].1, PaginationState::new(4, 10, 5));
        assert_eq!(published[0].0, PaginationState::new(4, 10, 5));
        // the callback is the only writer; this one never commits
        assert_eq!(*store.pagination(), PaginationState::default());
    }

    #[test]
    fn test_missing_change_handler_drops_update() {
        let store = Rc::new(TableStore::new(RowModel::from_records(0..50)));
        let table = Table::new(store.clone(), TableOptions::new());
        table.set_page_index(3);
        assert_eq!(*table.get_pagination_state(), PaginationState::default());
    }
}
