//! Standard slicing strategy.
//!
//! The table performs no slicing on its own. Hosts that want the usual
//! "one page of top-level rows" behaviour install [`paginate_rows`] as their
//! `paginate_rows_fn`:
//!
//! ```
//! use tabula_core::{Table, TableOptions, paginate_rows};
//! use tabula_model::RowModel;
//!
//! let options = TableOptions::new().with_paginate_rows_fn(paginate_rows);
//! let (table, _store) = Table::in_memory(RowModel::from_records(0..25), options);
//!
//! table.set_page_index(2);
//! assert_eq!(table.get_pagination_rows().len(), 5);
//! ```
//!
//! Since an external strategy owns the page count, hosts using it should
//! publish the count themselves with `set_page_count`.

use std::sync::Arc;

use tabula_model::RowModel;

use crate::table::Table;

/// Returns the top-level rows of the current page with their descendants.
///
/// A page past the end yields an empty model.
pub fn paginate_rows<T: 'static>(table: &Table<T>, row_model: &Arc<RowModel<T>>) -> Arc<RowModel<T>> {
    let state = table.get_pagination_state();
    let start = usize::try_from(state.top_row_index()).unwrap_or(usize::MAX);
    let page_size = usize::try_from(state.page_size.max(1)).unwrap_or(usize::MAX);

    let rows = row_model
        .rows
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Arc::new(RowModel::from_rows(rows))
}
