//! Column Definition
//!
//! Defines the fixed, ordered Column Set with per-column capabilities.

use crate::domain::config::GridConfig;
use crate::helpers::capitalize;

/// Column definition for the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column identifier (record field name)
    pub id: String,
    /// Column header label
    pub label: String,
    /// Whether the column accepts sort commands
    pub sortable: bool,
    /// Whether the column accepts filter terms
    pub filterable: bool,
}

impl Column {
    /// Create a new column with a label derived from its id
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: capitalize(&id),
            id,
            sortable: false,
            filterable: false,
        }
    }

}

/// Ordered set of columns; every row exposes exactly these, in this order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    /// Create a column set, dropping duplicate ids (first one wins)
    pub fn new(columns: Vec<Column>) -> Self {
        let mut unique: Vec<Column> = Vec::with_capacity(columns.len());
        for column in columns {
            if !unique.iter().any(|c| c.id == column.id) {
                unique.push(column);
            }
        }
        Self { columns: unique }
    }

    /// Build the column set described by a normalized grid configuration
    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(
            config
                .columns
                .iter()
                .map(|id| Column {
                    sortable: config.sortable.contains(id),
                    filterable: config.filterable.contains(id),
                    ..Column::new(id.as_str())
                })
                .collect(),
        )
    }

    /// Position of a column by id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    /// Column at a position
    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Column by id
    pub fn find(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Iterate over columns in display order
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Column ids in display order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_config() {
        let columns = ColumnSet::from_config(&GridConfig::default());
        let ids: Vec<&str> = columns.ids().collect();
        assert_eq!(ids, vec!["name", "capital", "area", "population", "region"]);

        let name = columns.find("name").expect("name column");
        assert!(name.sortable);
        assert!(!name.filterable);
        assert_eq!(name.label, "Name");

        let capital = columns.find("capital").expect("capital column");
        assert!(!capital.sortable);
        assert!(capital.filterable);
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let columns = ColumnSet::new(vec![
            Column {
                sortable: true,
                ..Column::new("a")
            },
            Column::new("b"),
            Column::new("a"),
        ]);
        assert_eq!(columns.len(), 2);
        assert!(columns.find("a").expect("a").sortable);
        assert_eq!(columns.position("b"), Some(1));
        assert_eq!(columns.position("missing"), None);
    }
}
