//! Derived pagination accessors.

use std::sync::Arc;

use tabula_model::{UNKNOWN_PAGE_COUNT, Updater, page_count_for};

use crate::table::Table;

impl<T: 'static> Table<T> {
    /// Page indices `0..page_count`; empty while the count is unknown or zero.
    ///
    /// Memoized on `(page_size, page_count)`.
    pub fn get_page_options(&self) -> Arc<Vec<i64>> {
        let state = self.host.pagination();
        let debug = self.options.debug;
        self.page_options
            .get((state.page_size, state.page_count), |&(_, page_count)| {
                if debug {
                    tracing::debug!(key = "page_options", page_count, "Building page options");
                }
                Arc::new((0..page_count.max(0)).collect())
            })
    }

    pub fn get_can_previous_page(&self) -> bool {
        self.host.pagination().page_index > 0
    }

    /// Whether a later page exists. Always `true` while the count is unknown
    /// and always `false` when there are no pages.
    pub fn get_can_next_page(&self) -> bool {
        let state = self.host.pagination();
        match state.page_count {
            UNKNOWN_PAGE_COUNT => true,
            0 => false,
            _ => {
                let rows = self.host.expanded_row_model().len();
                state.page_index < page_count_for(rows, state.page_size) - 1
            }
        }
    }

    /// Moves one page back. Clamping keeps the index at 0 on the first page.
    pub fn goto_previous_page(&self) {
        self.set_page_index(Updater::from_fn(|old: &i64| old.saturating_sub(1)));
    }

    /// Moves one page forward. Clamping keeps the index on the last page.
    pub fn goto_next_page(&self) {
        self.set_page_index(Updater::from_fn(|old: &i64| old.saturating_add(1)));
    }
}
