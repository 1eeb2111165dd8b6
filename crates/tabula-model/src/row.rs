//! Rows and row models.
//!
//! A [`RowModel`] is what each stage of the table pipeline hands to the next:
//! the top-level rows, every row flattened depth-first, and a lookup by id.
//! Rows are shared (`Arc`) between models so slicing a model never copies
//! row data.

use std::collections::BTreeMap;
use std::sync::Arc;

/// A single table row wrapping one record of the host's data.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    /// Unique row identifier.
    pub id: String,
    /// Position among its siblings.
    pub index: usize,
    /// Nesting depth (0 for top-level rows).
    pub depth: usize,
    /// The host record.
    pub original: T,
    /// Child rows (grouping or expansion).
    pub sub_rows: Vec<Arc<Row<T>>>,
}

impl<T> Row<T> {
    pub fn new(id: impl Into<String>, index: usize, original: T) -> Self {
        Self {
            id: id.into(),
            index,
            depth: 0,
            original,
            sub_rows: Vec::new(),
        }
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_sub_rows(mut self, sub_rows: Vec<Arc<Row<T>>>) -> Self {
        self.sub_rows = sub_rows;
        self
    }
}

/// A collection of rows as produced by one pipeline stage.
#[derive(Debug, Clone)]
pub struct RowModel<T> {
    /// Top-level rows in display order.
    pub rows: Vec<Arc<Row<T>>>,
    /// All rows including descendants, parents before children.
    pub flat_rows: Vec<Arc<Row<T>>>,
    /// All rows keyed by id.
    pub rows_by_id: BTreeMap<String, Arc<Row<T>>>,
}

impl<T> Default for RowModel<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> RowModel<T> {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            flat_rows: Vec::new(),
            rows_by_id: BTreeMap::new(),
        }
    }

    /// Builds a model from top-level rows, deriving `flat_rows` and `rows_by_id`.
    pub fn from_rows(rows: Vec<Arc<Row<T>>>) -> Self {
        let mut flat_rows = Vec::with_capacity(rows.len());
        let mut rows_by_id = BTreeMap::new();

        fn visit<T>(
            row: &Arc<Row<T>>,
            flat_rows: &mut Vec<Arc<Row<T>>>,
            rows_by_id: &mut BTreeMap<String, Arc<Row<T>>>,
        ) {
            flat_rows.push(Arc::clone(row));
            rows_by_id.insert(row.id.clone(), Arc::clone(row));
            for child in &row.sub_rows {
                visit(child, flat_rows, rows_by_id);
            }
        }

        for row in &rows {
            visit(row, &mut flat_rows, &mut rows_by_id);
        }

        Self {
            rows,
            flat_rows,
            rows_by_id,
        }
    }

    /// Builds a flat model from records, using each record's position as its id.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabula_model::RowModel;
    ///
    /// let model = RowModel::from_records(["a", "b", "c"]);
    /// assert_eq!(model.len(), 3);
    /// assert_eq!(model.rows_by_id["1"].original, "b");
    /// ```
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Self {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| Arc::new(Row::new(index.to_string(), index, record)))
            .collect();
        Self::from_rows(rows)
    }

    /// Number of top-level rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
