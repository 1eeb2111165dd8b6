//! Page index reset on structural row changes.
//!
//! The host calls [`Table::notify_page_index_reset`] whenever the upstream
//! row set is rebuilt (filtering, grouping, new data). The first call only
//! registers the table, so mounting a table never moves it off its initial
//! page. Later calls reset the page index to 0 when enabled by the options:
//!
//! | `auto_reset_all` | `auto_reset_page_index` | action |
//! |------------------|-------------------------|--------|
//! | `Some(false)`    | any                     | none   |
//! | `Some(true)`     | any                     | reset  |
//! | `None`           | `true`                  | reset  |
//! | `None`           | `false`                 | none   |
//!
//! Only the page index is reset. The page size is left alone.

use crate::table::Table;

/// Per-table lifecycle of the auto-reset notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetRegistration {
    #[default]
    NotRegistered,
    Registered,
}

impl<T: 'static> Table<T> {
    pub fn notify_page_index_reset(&self) {
        if self.page_index_reset.replace(ResetRegistration::Registered)
            == ResetRegistration::NotRegistered
        {
            tracing::trace!("Page index reset registered");
            return;
        }

        if self.should_auto_reset_page_index() {
            tracing::trace!("Row set rebuilt, resetting page index");
            self.reset_page_index();
        }
    }

    pub fn page_index_reset_registration(&self) -> ResetRegistration {
        self.page_index_reset.get()
    }

    fn should_auto_reset_page_index(&self) -> bool {
        match self.options.auto_reset_all {
            Some(all) => all,
            None => self.options.auto_reset_page_index,
        }
    }
}
