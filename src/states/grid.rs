//! Grid State
//!
//! Owns the dataset and the grid's mutable state (filters, sort, page,
//! page size) and composes the table engines into one pipeline:
//!
//! ```text
//! command ──▶ state update ──▶ filter ──▶ sort ──▶ paginate ──▶ GridView
//! ```
//!
//! Commands never fail. Unknown columns, columns without the needed
//! capability and out-of-range pages are ignored or clamped.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::config::GridConfig;
use crate::domain::row::Row;
use crate::domain::view::{
    DisplayRange, GridView, HeaderView, LoadStatus, SortDirection, SortState,
};
use crate::error::Result;
use crate::eventing::GridCommand;
use crate::table::{ColumnSet, DatasetStore, FilterState, filter, pagination, sort};

/// State engine behind a data grid
#[derive(Debug)]
pub struct GridController {
    columns: ColumnSet,
    store: DatasetStore,
    filters: FilterState,
    sort: SortState,
    page_size: usize,
    page_index: usize,
    paginated: bool,
    header_fixed: bool,
    status: LoadStatus,
    /// Filtered then sorted rows, before pagination
    derived: Vec<Arc<Row>>,
}

impl GridController {
    /// Create an empty grid from a configuration
    pub fn new(config: GridConfig) -> Result<Self> {
        let config = config.normalize()?;
        let columns = ColumnSet::from_config(&config);

        let filters = FilterState::new(
            columns
                .iter()
                .enumerate()
                .filter(|(_, c)| c.filterable)
                .map(|(i, _)| i),
        );

        // Exactly one active sort at all times: first sortable column, else first column
        let initial_sort = columns
            .iter()
            .find(|c| c.sortable)
            .or_else(|| columns.get(0))
            .map(|c| c.id.clone())
            .unwrap_or_default();

        Ok(Self {
            columns,
            store: DatasetStore::new(),
            filters,
            sort: SortState::ascending(initial_sort),
            page_size: config.page_size,
            page_index: 0,
            paginated: config.paginated,
            header_fixed: config.header_fixed,
            status: LoadStatus::Empty,
            derived: Vec::new(),
        })
    }

    // ==================== Getters ====================

    /// The immutable source rows
    pub fn source_rows(&self) -> &[Arc<Row>] {
        self.store.source_rows()
    }

    /// Filtered and sorted rows, before pagination
    pub fn derived_rows(&self) -> &[Arc<Row>] {
        &self.derived
    }

    /// Pages in the derived sequence (0 when empty, 1 when not paginated)
    pub fn total_pages(&self) -> usize {
        if self.paginated {
            pagination::total_pages(self.derived.len(), self.page_size)
        } else {
            usize::from(!self.derived.is_empty())
        }
    }

    /// Read-only projection for renderers
    pub fn view(&self) -> GridView {
        let total_pages = self.total_pages();

        let (rows, display_range, page_window) = if self.paginated {
            let page = pagination::paginate(&self.derived, self.page_size, self.page_index);
            (
                page.rows,
                page.display_range,
                pagination::page_window(self.page_index, total_pages),
            )
        } else {
            let total = self.derived.len();
            let range = if total == 0 {
                DisplayRange::default()
            } else {
                DisplayRange::new(1, total, total)
            };
            (self.derived.clone(), range, Vec::new())
        };

        let headers = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| HeaderView {
                id: column.id.clone(),
                label: column.label.clone(),
                sortable: column.sortable,
                filterable: column.filterable,
                sort: (column.id == self.sort.column).then_some(self.sort.direction),
                filter_term: self.filters.term(index).map(ToString::to_string),
            })
            .collect();

        GridView {
            headers,
            rows,
            page_index: self.page_index,
            total_pages,
            page_size: self.page_size,
            display_range,
            page_window,
            sort: self.sort.clone(),
            paginated: self.paginated,
            header_fixed: self.header_fixed,
            status: self.status.clone(),
            source_len: self.store.row_count(),
            loaded_at: self.store.loaded_at(),
        }
    }

    // ==================== Commands ====================

    /// Apply any command and return the new view
    pub fn dispatch(&mut self, command: GridCommand) -> GridView {
        tracing::debug!("Grid command: {}", command.name());
        match command {
            GridCommand::Load { rows } => self.load(rows),
            GridCommand::SetFilter { column, term } => self.set_filter(&column, term),
            GridCommand::SetSort { column } => self.set_sort(&column),
            GridCommand::SortBy { column, direction } => self.sort_by(&column, direction),
            GridCommand::SetPage { index } => self.set_page(index),
            GridCommand::NextPage => self.next_page(),
            GridCommand::PreviousPage => self.previous_page(),
            GridCommand::SetPageSize { size } => self.set_page_size(size),
        }
    }

    /// Replace the dataset and go back to the first page.
    /// Filters and sort carry over. Rows are fitted to the Column Set.
    pub fn load(&mut self, rows: Vec<Row>) -> GridView {
        self.store.load(rows, &self.columns);
        self.finish_load()
    }

    /// Project raw records onto the Column Set and load them
    pub fn load_records(&mut self, records: &[Value]) -> GridView {
        self.store.load_records(records, &self.columns);
        self.finish_load()
    }

    fn finish_load(&mut self) -> GridView {
        self.status = LoadStatus::Ready;
        self.page_index = 0;
        self.recompute();
        tracing::info!(
            "Loaded {} rows ({} after filters)",
            self.store.row_count(),
            self.derived.len()
        );
        self.view()
    }

    /// Mark a fetch as in flight; current rows stay visible
    pub fn mark_loading(&mut self) -> GridView {
        self.status = LoadStatus::Loading;
        self.view()
    }

    /// Record a failed fetch. The dataset keeps its prior content.
    pub fn fail_load(&mut self, message: impl Into<Arc<str>>) -> GridView {
        let message = message.into();
        tracing::warn!("Something went wrong while loading the dataset: {}", message);
        self.status = LoadStatus::Failed(message);
        self.view()
    }

    /// Set or clear a column's search term and go back to the first page
    pub fn set_filter(&mut self, column: &str, term: Option<String>) -> GridView {
        let Some(index) = self.columns.position(column) else {
            tracing::debug!("Ignoring filter on unknown column '{}'", column);
            return self.view();
        };

        if !self.filters.set(index, term) {
            tracing::debug!("Ignoring filter on non-filterable column '{}'", column);
            return self.view();
        }

        self.page_index = 0;
        self.recompute();
        self.view()
    }

    /// Sort by a column: the active column toggles direction, any other
    /// column starts ascending. The page is kept (clamped).
    pub fn set_sort(&mut self, column: &str) -> GridView {
        if !self.is_sortable(column) {
            return self.view();
        }

        let direction = if self.sort.column == column {
            self.sort.direction.toggled()
        } else {
            SortDirection::Ascending
        };
        self.apply_sort(column, direction)
    }

    /// Sort by a column in an explicit direction
    pub fn sort_by(&mut self, column: &str, direction: SortDirection) -> GridView {
        if !self.is_sortable(column) {
            return self.view();
        }
        self.apply_sort(column, direction)
    }

    fn is_sortable(&self, column: &str) -> bool {
        match self.columns.find(column) {
            Some(c) if c.sortable => true,
            Some(_) => {
                tracing::debug!("Ignoring sort on non-sortable column '{}'", column);
                false
            }
            None => {
                tracing::debug!("Ignoring sort on unknown column '{}'", column);
                false
            }
        }
    }

    fn apply_sort(&mut self, column: &str, direction: SortDirection) -> GridView {
        self.sort = SortState {
            column: column.to_string(),
            direction,
        };
        self.recompute();
        self.view()
    }

    /// Jump to a page, clamped into the valid range
    pub fn set_page(&mut self, index: usize) -> GridView {
        if !self.paginated {
            return self.view();
        }
        self.page_index = index.min(self.last_page());
        self.view()
    }

    /// Move one page forward; no-op on the last page
    pub fn next_page(&mut self) -> GridView {
        if self.paginated && self.page_index < self.last_page() {
            self.page_index += 1;
        }
        self.view()
    }

    /// Move one page back; no-op on the first page
    pub fn previous_page(&mut self) -> GridView {
        if self.paginated && self.page_index > 0 {
            self.page_index -= 1;
        }
        self.view()
    }

    /// Change rows per page (at least 1) and keep the page index in range
    pub fn set_page_size(&mut self, size: usize) -> GridView {
        self.page_size = size.max(1);
        self.page_index = self.page_index.min(self.last_page());
        self.view()
    }

    // ==================== Pipeline ====================

    fn last_page(&self) -> usize {
        self.total_pages().saturating_sub(1)
    }

    /// Filter, then sort, then bring the page index back into range
    fn recompute(&mut self) {
        let filtered = filter::apply(self.store.source_rows(), &self.filters);

        self.derived = match self.columns.position(&self.sort.column) {
            Some(column) => sort::apply(&filtered, column, self.sort.direction),
            None => filtered,
        };

        self.page_index = self.page_index.min(self.last_page());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::row::Cell;
    use proptest::prelude::*;
    use serde_json::json;

    fn region_config() -> GridConfig {
        GridConfig {
            columns: vec!["name".into(), "region".into(), "population".into()],
            sortable: vec!["name".into(), "population".into()],
            filterable: vec!["name".into(), "region".into()],
            page_size: 5,
            paginated: true,
            header_fixed: false,
        }
    }

    fn grid() -> GridController {
        GridController::new(region_config()).expect("grid")
    }

    fn african_trio() -> Vec<Value> {
        vec![
            json!({ "name": "Chad", "region": "Africa" }),
            json!({ "name": "Benin", "region": "Africa" }),
            json!({ "name": "Mali", "region": "Africa" }),
        ]
    }

    fn numbered_rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| {
                Row::new(vec![
                    Cell::from(format!("row{i:02}")),
                    Cell::from("Somewhere"),
                    Cell::Number(i as f64),
                ])
            })
            .collect()
    }

    #[test]
    fn test_new_grid_is_empty() {
        let view = grid().view();
        assert_eq!(view.status, LoadStatus::Empty);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.display_range.as_tuple(), (0, 0, 0));
        assert_eq!(view.sort, SortState::ascending("name"));
        assert!(view.header("name").and_then(|h| h.sort).is_some());
    }

    #[test]
    fn test_initial_sort_without_sortable_columns() {
        let config = GridConfig {
            sortable: Vec::new(),
            ..region_config()
        };
        let grid = GridController::new(config).expect("grid");
        assert_eq!(grid.view().sort, SortState::ascending("name"));
    }

    #[test]
    fn test_scenario_sort_by_name() {
        let mut grid = grid();
        let view = grid.load_records(&african_trio());
        assert_eq!(view.column_texts("name"), vec!["Benin", "Chad", "Mali"]);
    }

    #[test]
    fn test_scenario_filter_region() {
        let mut grid = grid();
        grid.load_records(&african_trio());

        let view = grid.set_filter("region", Some("aFrIcA".to_string()));
        assert_eq!(view.rows.len(), 3);

        let view = grid.set_filter("region", Some("europe".to_string()));
        assert!(view.rows.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.display_range.as_tuple(), (0, 0, 0));
        assert_eq!(view.page_index, 0);
    }

    #[test]
    fn test_scenario_twelve_rows() {
        let mut grid = grid();
        let view = grid.load(numbered_rows(12));
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.display_range.as_tuple(), (1, 5, 12));
        assert_eq!(view.column_texts("name"), vec!["row00", "row01", "row02", "row03", "row04"]);

        let view = grid.set_page(2);
        assert_eq!(view.display_range.as_tuple(), (11, 12, 12));
        assert_eq!(view.column_texts("name"), vec!["row10", "row11"]);
    }

    #[test]
    fn test_scenario_population_sorts_as_text() {
        let mut grid = grid();
        grid.load_records(&[
            json!({ "name": "a", "population": 9 }),
            json!({ "name": "b", "population": 80 }),
            json!({ "name": "c", "population": 700 }),
        ]);
        let view = grid.set_sort("population");
        assert_eq!(view.column_texts("population"), vec!["700", "80", "9"]);
        assert_eq!(view.sort, SortState::ascending("population"));
    }

    #[test]
    fn test_set_sort_toggles_same_column() {
        let mut grid = grid();
        grid.load_records(&african_trio());

        let view = grid.set_sort("name");
        assert_eq!(view.sort.direction, SortDirection::Descending);
        assert_eq!(view.column_texts("name"), vec!["Mali", "Chad", "Benin"]);

        let view = grid.set_sort("name");
        assert_eq!(view.sort.direction, SortDirection::Ascending);

        grid.set_sort("name");
        let view = grid.set_sort("population");
        assert_eq!(view.sort, SortState::ascending("population"));
    }

    #[test]
    fn test_sort_keeps_page() {
        let mut grid = grid();
        grid.load(numbered_rows(12));
        grid.set_page(1);
        let view = grid.set_sort("name");
        assert_eq!(view.page_index, 1);
    }

    #[test]
    fn test_filter_resets_page() {
        let mut grid = grid();
        grid.load(numbered_rows(12));
        grid.set_page(2);
        let view = grid.set_filter("name", Some("row".to_string()));
        assert_eq!(view.page_index, 0);
        assert_eq!(view.total_pages, 3);
    }

    #[test]
    fn test_unknown_or_incapable_columns_are_ignored() {
        let mut grid = grid();
        let before = grid.load_records(&african_trio());

        assert_eq!(grid.set_sort("capital"), before);
        assert_eq!(grid.set_sort("region"), before);
        assert_eq!(grid.sort_by("nope", SortDirection::Descending), before);
        assert_eq!(grid.set_filter("capital", Some("x".to_string())), before);
        assert_eq!(grid.set_filter("population", Some("x".to_string())), before);
    }

    #[test]
    fn test_page_navigation_boundaries() {
        let mut grid = grid();
        grid.load(numbered_rows(12));

        assert_eq!(grid.previous_page().page_index, 0);
        assert_eq!(grid.next_page().page_index, 1);
        assert_eq!(grid.next_page().page_index, 2);
        assert_eq!(grid.next_page().page_index, 2);
        assert_eq!(grid.previous_page().page_index, 1);

        assert_eq!(grid.set_page(99).page_index, 2);
        assert_eq!(grid.set_page(0).page_index, 0);
    }

    #[test]
    fn test_navigation_on_empty_grid() {
        let mut grid = grid();
        assert_eq!(grid.next_page().page_index, 0);
        assert_eq!(grid.previous_page().page_index, 0);
        assert_eq!(grid.set_page(3).page_index, 0);
    }

    #[test]
    fn test_set_page_size_clamps_index() {
        let mut grid = grid();
        grid.load(numbered_rows(12));
        grid.set_page(2);

        let view = grid.set_page_size(10);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.page_index, 1);
        assert_eq!(view.display_range.as_tuple(), (11, 12, 12));

        let view = grid.set_page_size(0);
        assert_eq!(view.page_size, 1);
        assert_eq!(view.total_pages, 12);
    }

    #[test]
    fn test_load_resets_page_and_keeps_filters() {
        let mut grid = grid();
        grid.load(numbered_rows(12));
        grid.set_filter("name", Some("row1".to_string()));
        grid.set_sort("name");
        grid.next_page();

        let view = grid.load(numbered_rows(20));
        assert_eq!(view.page_index, 0);
        assert_eq!(view.source_len, 20);
        // row10..row19 match "row1"
        assert_eq!(view.display_range.total, 10);
        assert_eq!(view.sort.direction, SortDirection::Descending);
        assert_eq!(view.header("name").and_then(|h| h.filter_term.clone()), Some("row1".into()));
    }

    #[test]
    fn test_load_rows_expose_exactly_the_column_set() {
        let mut grid = grid();
        let view = grid.dispatch(GridCommand::Load {
            rows: vec![
                Row::new(vec![Cell::from("Chad")]),
                Row::new(vec![
                    Cell::from("Mali"),
                    Cell::from("Africa"),
                    Cell::Number(20.0),
                    Cell::from("Bamako"),
                    Cell::from("extra"),
                ]),
            ],
        });

        assert_eq!(view.headers.len(), 3);
        let widths: Vec<usize> = view.rows.iter().map(|r| r.width()).collect();
        assert_eq!(widths, vec![3, 3]);
        assert_eq!(view.column_texts("population"), vec!["", "20"]);
    }

    #[test]
    fn test_failed_fetch_keeps_data() {
        let mut grid = grid();
        grid.load_records(&african_trio());
        grid.mark_loading();
        let view = grid.fail_load("connection refused");

        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.status.warning(), Some("connection refused"));
    }

    #[test]
    fn test_not_paginated_shows_everything() {
        let config = GridConfig {
            paginated: false,
            ..region_config()
        };
        let mut grid = GridController::new(config).expect("grid");

        let view = grid.load(numbered_rows(12));
        assert_eq!(view.rows.len(), 12);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.display_range.as_tuple(), (1, 12, 12));
        assert!(view.page_window.is_empty());
        assert_eq!(grid.next_page().page_index, 0);
        assert_eq!(grid.set_page(1).page_index, 0);
    }

    #[test]
    fn test_dispatch_matches_methods() {
        let mut by_method = grid();
        let mut by_command = grid();

        by_method.load_records(&african_trio());
        let rows: Vec<Row> = by_method.source_rows().iter().map(|r| (**r).clone()).collect();
        by_command.dispatch(GridCommand::Load { rows });

        let expected = by_method.set_filter("region", Some("afr".to_string()));
        let actual = by_command.dispatch(GridCommand::filter("region", "afr"));
        assert_eq!(expected.rows, actual.rows);

        let expected = by_method.set_sort("name");
        let actual = by_command.dispatch(GridCommand::sort("name"));
        assert_eq!(expected.rows, actual.rows);
        assert_eq!(expected.sort, actual.sort);
    }

    #[test]
    fn test_idempotent_filter_and_sort_by() {
        let mut grid = grid();
        grid.load(numbered_rows(12));

        let once = grid.set_filter("name", Some("row0".to_string()));
        let twice = grid.set_filter("name", Some("row0".to_string()));
        assert_eq!(once, twice);

        let once = grid.sort_by("population", SortDirection::Descending);
        let twice = grid.sort_by("population", SortDirection::Descending);
        assert_eq!(once, twice);
    }

    proptest! {
        /// Walking every page reproduces the derived sequence
        #[test]
        fn prop_pages_cover_derived_rows(
            names in prop::collection::vec("[a-d]{1,3}", 0..40),
            page_size in 1usize..8,
            term in prop::option::of("[a-d]"),
        ) {
            let mut grid = grid();
            grid.set_page_size(page_size);
            grid.load(
                names
                    .iter()
                    .map(|n| Row::new(vec![Cell::from(n.as_str()), Cell::from("x"), Cell::Number(1.0)]))
                    .collect(),
            );
            grid.set_filter("name", term);

            let derived = grid.derived_rows().to_vec();
            let mut joined = Vec::new();
            let total = grid.view().total_pages;
            for index in 0..total {
                joined.extend(grid.set_page(index).rows);
            }
            prop_assert_eq!(joined, derived);
        }
    }
}
