//! GridCommand - Grid Command Enum
//!
//! Every state transition the grid accepts, as a message. Any driver
//! (terminal, test harness, another UI) can feed these to
//! `GridController::dispatch`.

use crate::domain::row::Row;
use crate::domain::view::SortDirection;

/// Commands accepted by the grid controller
#[derive(Debug, Clone, PartialEq)]
pub enum GridCommand {
    /// Replace the dataset
    Load { rows: Vec<Row> },

    /// Set (or clear, with `None` / empty) a column's search term
    SetFilter { column: String, term: Option<String> },

    /// Sort by a column; the active column toggles direction
    SetSort { column: String },

    /// Sort by a column in an explicit direction
    SortBy {
        column: String,
        direction: SortDirection,
    },

    /// Jump to a zero-based page
    SetPage { index: usize },

    /// Move one page forward
    NextPage,

    /// Move one page back
    PreviousPage,

    /// Change the number of rows per page
    SetPageSize { size: usize },
}

impl GridCommand {
    /// Create a filter command
    pub fn filter(column: impl Into<String>, term: impl Into<String>) -> Self {
        Self::SetFilter {
            column: column.into(),
            term: Some(term.into()),
        }
    }

    /// Create a command clearing a column's filter
    pub fn clear_filter(column: impl Into<String>) -> Self {
        Self::SetFilter {
            column: column.into(),
            term: None,
        }
    }

    /// Create a toggling sort command
    pub fn sort(column: impl Into<String>) -> Self {
        Self::SetSort {
            column: column.into(),
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load { .. } => "load",
            Self::SetFilter { .. } => "set_filter",
            Self::SetSort { .. } => "set_sort",
            Self::SortBy { .. } => "sort_by",
            Self::SetPage { .. } => "set_page",
            Self::NextPage => "next_page",
            Self::PreviousPage => "previous_page",
            Self::SetPageSize { .. } => "set_page_size",
        }
    }
}
