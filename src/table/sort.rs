//! Sort Engine
//!
//! Orders rows by the string form of one column using the locale-aware
//! collator. Numeric columns sort as strings ("100" before "20").

use std::sync::Arc;

use crate::domain::row::Row;
use crate::domain::view::SortDirection;
use crate::helpers::locale_compare;

/// Sort a row sequence by one column.
///
/// Returns a new sequence; the input is untouched. The sort is stable, so
/// rows with equal keys keep their input order in either direction.
/// Absent cells sort as the empty string, ahead of any text.
pub fn apply(rows: &[Arc<Row>], column: usize, direction: SortDirection) -> Vec<Arc<Row>> {
    let mut keyed: Vec<(String, Arc<Row>)> = rows
        .iter()
        .map(|row| (row.cell(column).as_text().into_owned(), Arc::clone(row)))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| direction.apply(locale_compare(a, b)));

    keyed.into_iter().map(|(_, row)| row).collect()
}
