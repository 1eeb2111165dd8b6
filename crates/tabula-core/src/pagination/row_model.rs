//! Memoized paginated row model.
//!
//! The paginated model depends on exactly three inputs, compared by identity:
//! the published pagination state, the expanded (pre-pagination) row model
//! and the configured `paginate_rows_fn`. Anything else a host changes, such
//! as sorting or column state, leaves the cache untouched until it produces a
//! new expanded model.

use std::collections::BTreeMap;
use std::sync::Arc;

use tabula_model::{Row, RowModel};

use crate::table::Table;

impl<T: 'static> Table<T> {
    /// Rows after pagination.
    ///
    /// Without a `paginate_rows_fn`, or with no rows to paginate, this is the
    /// pre-pagination model itself. Otherwise the strategy's result is cached
    /// until one of the dependencies changes.
    pub fn get_pagination_row_model(&self) -> Arc<RowModel<T>> {
        let deps = (
            self.host.pagination(),
            self.host.expanded_row_model(),
            self.options.paginate_rows_fn.clone(),
        );
        self.pagination_row_model
            .get(deps, |(_, row_model, paginate_rows_fn)| {
                let Some(paginate) = paginate_rows_fn else {
                    return Arc::clone(row_model);
                };
                if row_model.is_empty() {
                    return Arc::clone(row_model);
                }
                if self.options.debug {
                    tracing::debug!(rows = row_model.len(), "Paginating...");
                }
                paginate(self, row_model)
            })
    }

    pub fn get_pre_pagination_row_model(&self) -> Arc<RowModel<T>> {
        self.host.expanded_row_model()
    }

    pub fn get_pre_pagination_rows(&self) -> Vec<Arc<Row<T>>> {
        self.host.expanded_row_model().rows.clone()
    }

    pub fn get_pre_pagination_flat_rows(&self) -> Vec<Arc<Row<T>>> {
        self.host.expanded_row_model().flat_rows.clone()
    }

    pub fn get_pre_pagination_rows_by_id(&self) -> BTreeMap<String, Arc<Row<T>>> {
        self.host.expanded_row_model().rows_by_id.clone()
    }

    pub fn get_pagination_rows(&self) -> Vec<Arc<Row<T>>> {
        self.get_pagination_row_model().rows.clone()
    }

    pub fn get_pagination_flat_rows(&self) -> Vec<Arc<Row<T>>> {
        self.get_pagination_row_model().flat_rows.clone()
    }

    pub fn get_pagination_rows_by_id(&self) -> BTreeMap<String, Arc<Row<T>>> {
        self.get_pagination_row_model().rows_by_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use tabula_model::PaginationState;

    use crate::{PaginateRowsFn, TableOptions, paginate_rows};

    use super::*;

    fn counting(runs: &Rc<Cell<usize>>) -> PaginateRowsFn<usize> {
        let runs = Rc::clone(runs);
        Rc::new(move |table: &Table<usize>, rows: &Arc<RowModel<usize>>| {
            runs.set(runs.get() + 1);
            paginate_rows(table, rows)
        })
    }

    #[test]
    fn test_pass_through_without_paginator() {
        let (table, _store) =
            Table::in_memory(RowModel::from_records(0..30), TableOptions::new());
        assert_eq!(table.get_pagination_row_model().len(), 30);
        assert!(Arc::ptr_eq(
            &table.get_pagination_row_model(),
            &table.get_pre_pagination_row_model()
        ));
    }

    #[test]
    fn test_empty_rows_skip_paginator() {
        let runs = Rc::new(Cell::new(0));
        let options = TableOptions::new().with_shared_paginate_rows_fn(counting(&runs));
        let (table, _store) = Table::in_memory(RowModel::from_records(Vec::<usize>::new()), options);

        assert!(table.get_pagination_row_model().is_empty());
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn test_cached_until_pagination_changes() {
        let runs = Rc::new(Cell::new(0));
        let options = TableOptions::new().with_shared_paginate_rows_fn(counting(&runs));
        let (table, _store) = Table::in_memory(RowModel::from_records(0..30), options);

        let first = table.get_pagination_row_model();
        let second = table.get_pagination_row_model();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(runs.get(), 1);

        table.set_page_index(1);
        let third = table.get_pagination_row_model();
        assert_eq!(runs.get(), 2);
        assert_eq!(third.rows[0].original, 10);
    }

    #[test]
    fn test_recomputes_on_new_upstream_rows() {
        let runs = Rc::new(Cell::new(0));
        let options = TableOptions::new().with_shared_paginate_rows_fn(counting(&runs));
        let (table, store) = Table::in_memory(RowModel::from_records(0..30), options);

        table.get_pagination_row_model();
        store.set_rows(RowModel::from_records(100..130));
        let model = table.get_pagination_row_model();

        assert_eq!(runs.get(), 2);
        assert_eq!(model.rows[0].original, 100);
    }

    #[test]
    fn test_unrelated_option_change_keeps_cache() {
        let runs = Rc::new(Cell::new(0));
        let options = TableOptions::new().with_shared_paginate_rows_fn(counting(&runs));
        let (mut table, _store) = Table::in_memory(RowModel::from_records(0..30), options);

        let first = table.get_pagination_row_model();
        let options = table.options().clone().with_auto_reset_page_index(false);
        table.set_options(options);
        let second = table.get_pagination_row_model();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(runs.get(), 1);

        let options = table
            .options()
            .clone()
            .with_shared_paginate_rows_fn(counting(&runs));
        table.set_options(options);
        table.get_pagination_row_model();
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn test_row_pass_throughs() {
        let options = TableOptions::new()
            .with_paginate_rows_fn(paginate_rows)
            .with_initial_pagination(PaginationState::new(1, 4, -1));
        let (table, _store) = Table::in_memory(RowModel::from_records(0..10), options);

        assert_eq!(table.get_pre_pagination_rows().len(), 10);
        assert_eq!(table.get_pre_pagination_flat_rows().len(), 10);
        assert_eq!(table.get_pre_pagination_rows_by_id().len(), 10);

        let ids: Vec<String> = table
            .get_pagination_rows()
            .iter()
            .map(|row| row.id.clone())
            .collect();
        assert_eq!(ids, ["4", "5", "6", "7"]);
        assert_eq!(table.get_pagination_flat_rows().len(), 4);
        assert!(table.get_pagination_rows_by_id().contains_key("7"));
    }
}
