//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COLUMNS, DEFAULT_FILTERABLE, DEFAULT_PAGE_SIZE, DEFAULT_SORTABLE, DEFAULT_SOURCE_URL,
    FETCH_TIMEOUT_SECS,
};
use crate::error::{Error, Result};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Where the dataset is fetched from
    pub source: SourceConfig,
    /// Grid layout and behavior
    pub grid: GridConfig,
}

/// Dataset source configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceConfig {
    /// HTTP(S) URL or local path of a JSON array of records
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            timeout_secs: FETCH_TIMEOUT_SECS,
        }
    }
}

/// Grid configuration, supplied once at construction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GridConfig {
    /// Ordered Column Set
    pub columns: Vec<String>,
    /// Columns that accept sort commands
    pub sortable: Vec<String>,
    /// Columns that accept filter terms
    pub filterable: Vec<String>,
    /// Rows per page
    pub page_size: usize,
    /// Whether the grid is split into pages
    pub paginated: bool,
    /// Render hint: keep the header visible
    pub header_fixed: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS.iter().map(ToString::to_string).collect(),
            sortable: DEFAULT_SORTABLE.iter().map(ToString::to_string).collect(),
            filterable: DEFAULT_FILTERABLE.iter().map(ToString::to_string).collect(),
            page_size: DEFAULT_PAGE_SIZE,
            paginated: true,
            header_fixed: true,
        }
    }
}

impl GridConfig {
    /// Normalize the configuration.
    ///
    /// Duplicate columns are collapsed, sortable/filterable entries that do not
    /// name a configured column are dropped, and the page size is at least 1.
    /// An empty Column Set is rejected.
    pub fn normalize(mut self) -> Result<Self> {
        let mut columns: Vec<String> = Vec::with_capacity(self.columns.len());
        for column in self.columns.drain(..) {
            if columns.contains(&column) {
                tracing::warn!("Duplicate column '{}' ignored", column);
            } else {
                columns.push(column);
            }
        }

        if columns.is_empty() {
            return Err(Error::Invalid {
                message: "grid needs at least one column".to_string(),
            });
        }

        self.sortable = retain_known(self.sortable, &columns, "sortable");
        self.filterable = retain_known(self.filterable, &columns, "filterable");
        self.columns = columns;
        self.page_size = self.page_size.max(1);

        Ok(self)
    }
}

fn retain_known(subset: Vec<String>, columns: &[String], kind: &str) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(subset.len());
    for column in subset {
        if !columns.contains(&column) {
            tracing::warn!("Unknown {} column '{}' ignored", kind, column);
        } else if !kept.contains(&column) {
            kept.push(column);
        }
    }
    kept
}
