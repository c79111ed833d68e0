//! Dataset Store
//!
//! Holds the immutable source rows. Downstream stages never mutate them;
//! every transform produces a new sequence of shared row handles.

use std::sync::Arc;

use chrono::{DateTime, Local};
use serde_json::Value;

use crate::domain::row::Row;
use crate::table::column::ColumnSet;

/// In-memory source dataset
#[derive(Debug, Default)]
pub struct DatasetStore {
    rows: Arc<[Arc<Row>]>,
    loaded_at: Option<DateTime<Local>>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the source dataset.
    ///
    /// Every row is fitted to the Column Set: short rows gain absent cells,
    /// extra cells are dropped.
    pub fn load(&mut self, rows: Vec<Row>, columns: &ColumnSet) {
        let width = columns.len();
        self.rows = rows
            .into_iter()
            .map(|row| Arc::new(row.fit(width)))
            .collect();
        self.loaded_at = Some(Local::now());
    }

    /// Project raw records onto the Column Set and replace the dataset
    pub fn load_records(&mut self, records: &[Value], columns: &ColumnSet) {
        self.load(records.iter().map(|r| Row::project(r, columns)).collect(), columns);
    }

    /// The immutable source sequence
    pub fn source_rows(&self) -> &[Arc<Row>] {
        &self.rows
    }

    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }

    /// Number of source rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
