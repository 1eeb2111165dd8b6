//! Host collaborator surface.
//!
//! The table reads its inputs through [`TableHost`]. Writes go the other way,
//! through the `on_pagination_change` callback, so the host stays the single
//! writer of record.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use tabula_model::{PaginationState, RowModel, Updater};

use crate::options::OnChangeFn;

/// Read access to the state and upstream row models owned by the host.
pub trait TableHost<T> {
    /// Current pagination state. A new `Arc` is expected after every commit.
    fn pagination(&self) -> Arc<PaginationState>;

    /// Rows after sorting, filtering, grouping and expansion.
    fn expanded_row_model(&self) -> Arc<RowModel<T>>;

    /// Rows before expansion; used to compute the page count.
    fn pre_expanded_row_model(&self) -> Arc<RowModel<T>> {
        self.expanded_row_model()
    }
}

/// In-memory host holding pagination state and the upstream row models.
pub struct TableStore<T> {
    pagination: RefCell<Arc<PaginationState>>,
    expanded: RefCell<Arc<RowModel<T>>>,
    pre_expanded: RefCell<Option<Arc<RowModel<T>>>>,
}

impl<T> TableStore<T> {
    pub fn new(rows: RowModel<T>) -> Self {
        Self {
            pagination: RefCell::new(Arc::new(PaginationState::default())),
            expanded: RefCell::new(Arc::new(rows)),
            pre_expanded: RefCell::new(None),
        }
    }

    pub fn with_pagination(self, state: PaginationState) -> Self {
        *self.pagination.borrow_mut() = Arc::new(state);
        self
    }

    /// Replaces the expanded row model, as the upstream pipeline does after a
    /// structural rebuild.
    pub fn set_rows(&self, rows: RowModel<T>) -> Arc<RowModel<T>> {
        let rows = Arc::new(rows);
        *self.expanded.borrow_mut() = Arc::clone(&rows);
        rows
    }

    /// Sets a separate pre-expansion model. Without one the expanded model is used.
    pub fn set_pre_expanded_rows(&self, rows: RowModel<T>) {
        *self.pre_expanded.borrow_mut() = Some(Arc::new(rows));
    }

    /// Applies `updater` to the stored state.
    pub fn commit(&self, updater: &Updater<PaginationState>) {
        let next = updater.apply(&self.pagination.borrow());
        *self.pagination.borrow_mut() = Arc::new(next);
    }
}

impl<T> TableHost<T> for TableStore<T> {
    fn pagination(&self) -> Arc<PaginationState> {
        Arc::clone(&self.pagination.borrow())
    }

    fn expanded_row_model(&self) -> Arc<RowModel<T>> {
        Arc::clone(&self.expanded.borrow())
    }

    fn pre_expanded_row_model(&self) -> Arc<RowModel<T>> {
        match self.pre_expanded.borrow().as_ref() {
            Some(rows) => Arc::clone(rows),
            None => self.expanded_row_model(),
        }
    }
}

/// Builds a change callback that commits every update into `store`.
pub fn make_state_updater<T: 'static>(store: &Rc<TableStore<T>>) -> OnChangeFn<PaginationState> {
    let store = Rc::clone(store);
    Rc::new(move |updater: Updater<PaginationState>, _preview: PaginationState| {
        store.commit(&updater);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_replaces_identity() {
        let store = TableStore::new(RowModel::from_records([1, 2, 3]));
        let before = store.pagination();

        store.commit(&Updater::Value(*before));

        let after = store.pagination();
        assert_eq!(*before, *after);
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_pre_expanded_falls_back_to_expanded() {
        let store = TableStore::new(RowModel::from_records(["a", "b"]));
        assert!(Arc::ptr_eq(
            &store.pre_expanded_row_model(),
            &store.expanded_row_model()
        ));

        store.set_pre_expanded_rows(RowModel::from_records(["a"]));
        assert_eq!(store.pre_expanded_row_model().len(), 1);
        assert_eq!(store.expanded_row_model().len(), 2);
    }

    #[test]
    fn test_state_updater_commits() {
        let store = Rc::new(TableStore::new(RowModel::from_records([1])));
        let on_change = make_state_updater(&store);

        let updater = Updater::from_fn(|old: &PaginationState| PaginationState {
            page_size: 25,
            ..*old
        });
        let preview = updater.apply(&store.pagination());
        on_change(updater, preview);

        assert_eq!(store.pagination().page_size, 25);
    }
}
