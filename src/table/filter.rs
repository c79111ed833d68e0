//! Filter Engine
//!
//! Per-column, case-insensitive substring predicates, combined by
//! conjunction. Evaluation order across columns never changes the result.

use std::sync::Arc;

use hashlink::LinkedHashMap;

use crate::domain::row::{Cell, Row};
use crate::helpers::contains_ignore_case;

/// Search terms keyed by filterable column position, in column order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    terms: LinkedHashMap<usize, Option<String>>,
}

impl FilterState {
    /// Create a filter state with no active term on the given columns
    pub fn new(filterable: impl IntoIterator<Item = usize>) -> Self {
        Self {
            terms: filterable.into_iter().map(|column| (column, None)).collect(),
        }
    }

    /// Set the term for a column. An empty term clears the constraint.
    ///
    /// Returns `false` (and changes nothing) when the column is not filterable.
    pub fn set(&mut self, column: usize, term: Option<String>) -> bool {
        match self.terms.get_mut(&column) {
            Some(slot) => {
                *slot = term.filter(|t| !t.is_empty());
                true
            }
            None => false,
        }
    }

    /// Active term for a column
    pub fn term(&self, column: usize) -> Option<&str> {
        self.terms.get(&column).and_then(|t| t.as_deref())
    }

    /// Columns with a non-empty term
    pub fn active(&self) -> impl Iterator<Item = (usize, &str)> {
        self.terms
            .iter()
            .filter_map(|(column, term)| term.as_deref().map(|t| (*column, t)))
    }

    pub fn is_active(&self) -> bool {
        self.active().next().is_some()
    }
}

/// Whether a single cell satisfies a lower-cased term
fn cell_matches(cell: &Cell, needle_lower: &str) -> bool {
    cell.is_present() && contains_ignore_case(&cell.as_text(), needle_lower)
}

/// Apply the filter state to a row sequence.
///
/// With no active term the input is returned unchanged.
pub fn apply(rows: &[Arc<Row>], filters: &FilterState) -> Vec<Arc<Row>> {
    if !filters.is_active() {
        return rows.to_vec();
    }

    let needles: Vec<(usize, String)> = filters
        .active()
        .map(|(column, term)| (column, term.to_lowercase()))
        .collect();

    rows.iter()
        .filter(|row| {
            needles
                .iter()
                .all(|(column, needle)| cell_matches(row.cell(*column), needle))
        })
        .cloned()
        .collect()
}
