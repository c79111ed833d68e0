//! Row - Projected Dataset Records
//!
//! Fetched records have arbitrary shape; each one is projected onto the
//! Column Set so that a row holds exactly one cell per configured column.

use std::borrow::Cow;

use serde_json::Value;

use crate::table::column::ColumnSet;

/// A scalar grid value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Null or missing field
    #[default]
    Absent,
}

static ABSENT: Cell = Cell::Absent;

impl Cell {
    /// Project a JSON value onto a scalar cell.
    ///
    /// Strings and numbers map directly, booleans become text, arrays are
    /// joined with commas. Objects and null are absent.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Cell::Text(s.clone()),
            Value::Number(n) => n.as_f64().map_or(Cell::Absent, Cell::Number),
            Value::Bool(b) => Cell::Text(b.to_string()),
            Value::Array(items) => Cell::Text(join_array(items)),
            Value::Null | Value::Object(_) => Cell::Absent,
        }
    }

    /// Whether the field carries a value
    pub fn is_present(&self) -> bool {
        !matches!(self, Cell::Absent)
    }

    /// String form used for display, filtering and sorting
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Cell::Text(s) => Cow::Borrowed(s),
            Cell::Number(n) => Cow::Owned(format_number(*n)),
            Cell::Absent => Cow::Borrowed(""),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Absent, Into::into)
    }
}

/// Integral values print without a fractional part ("652230", not "652230.0")
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

fn join_array(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Array(nested) => join_array(nested),
            other => Cell::from_json(other).as_text().into_owned(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// One dataset record projected onto the Column Set
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Create a row from cells already in Column Set order
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Project an arbitrary record onto the Column Set.
    ///
    /// Fields outside the set are dropped; missing fields (or a record that
    /// is not an object at all) become absent cells.
    pub fn project(record: &Value, columns: &ColumnSet) -> Self {
        let cells = columns
            .ids()
            .map(|id| record.get(id).map_or(Cell::Absent, Cell::from_json))
            .collect();
        Self { cells }
    }

    /// Cell at a column position; absent when the row is short
    pub fn cell(&self, index: usize) -> &Cell {
        self.cells.get(index).unwrap_or(&ABSENT)
    }

    /// Pad with absent cells or drop extra cells so the row has exactly
    /// `width` cells
    pub fn fit(mut self, width: usize) -> Self {
        self.cells.resize(width, Cell::Absent);
        self
    }

    /// Number of cells
    pub fn width(&self) -> usize {
        self.cells.len()
    }
}
