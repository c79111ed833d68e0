//! View - Read Model Handed to Renderers
//!
//! A `GridView` is an immutable snapshot of the grid after a command. The
//! caller decides whether and when to paint it; a newer view supersedes any
//! older one.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::domain::row::Row;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Header indicator
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// The single active sort
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }
}

/// "Showing start to end of total" numbers, 1-based and inclusive.
/// All zero when nothing is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DisplayRange {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl DisplayRange {
    pub fn new(start: usize, end: usize, total: usize) -> Self {
        Self { start, end, total }
    }

    pub fn as_tuple(&self) -> (usize, usize, usize) {
        (self.start, self.end, self.total)
    }
}

impl fmt::Display for DisplayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} to {} of {}", self.start, self.end, self.total)
    }
}

/// Dataset load status
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing loaded yet
    #[default]
    Empty,
    /// A fetch is in flight; previous rows (if any) are still shown
    Loading,
    /// Rows loaded successfully
    Ready,
    /// The last fetch failed; previous rows (if any) are kept
    Failed(Arc<str>),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Warning to surface to the user, if any
    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Per-column header information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub id: String,
    pub label: String,
    pub sortable: bool,
    pub filterable: bool,
    /// Direction when this column is the active sort
    pub sort: Option<SortDirection>,
    /// Active filter term, if any
    pub filter_term: Option<String>,
}

/// Immutable grid snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct GridView {
    /// Column headers in Column Set order
    pub headers: Vec<HeaderView>,
    /// Rows of the current page, cells in Column Set order
    pub rows: Vec<Arc<Row>>,
    /// Zero-based current page
    pub page_index: usize,
    /// Number of pages in the derived sequence (0 when empty)
    pub total_pages: usize,
    pub page_size: usize,
    pub display_range: DisplayRange,
    /// Zero-based page numbers to offer as links
    pub page_window: Vec<usize>,
    pub sort: SortState,
    pub paginated: bool,
    pub header_fixed: bool,
    pub status: LoadStatus,
    /// Number of source rows before filtering
    pub source_len: usize,
    /// When the current dataset was loaded
    pub loaded_at: Option<DateTime<Local>>,
}

impl GridView {
    pub fn has_previous(&self) -> bool {
        self.paginated && self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.paginated && self.page_index + 1 < self.total_pages
    }

    /// Header of a column by id
    pub fn header(&self, id: &str) -> Option<&HeaderView> {
        self.headers.iter().find(|h| h.id == id)
    }

    /// Text of every cell in one column of the current page
    pub fn column_texts(&self, id: &str) -> Vec<String> {
        let Some(index) = self.headers.iter().position(|h| h.id == id) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .map(|row| row.cell(index).as_text().into_owned())
            .collect()
    }
}
