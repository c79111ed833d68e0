//! Grid Constants
//!
//! Centralized defaults shared by configuration, engine and renderer.

/// Columns read from each fetched record, in display order
pub const DEFAULT_COLUMNS: [&str; 5] = ["name", "capital", "area", "population", "region"];

/// Columns that accept sort commands by default
pub const DEFAULT_SORTABLE: [&str; 2] = ["name", "population"];

/// Columns that accept filter terms by default
pub const DEFAULT_FILTERABLE: [&str; 2] = ["capital", "area"];

/// Rows per page before the user changes the limit
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page sizes offered by the limit selector
pub const PAGE_SIZE_CHOICES: [usize; 4] = [5, 10, 20, 50];

/// Maximum number of page-number links shown at once
pub const PAGE_WINDOW_SIZE: usize = 5;

/// Dataset endpoint
pub const DEFAULT_SOURCE_URL: &str = "https://restcountries.eu/rest/v2/all";

/// Fetch timeout
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Widest cell the text renderer prints before truncating
pub const MAX_CELL_WIDTH: usize = 28;

/// Project identifiers for platform directories
pub const PROJECT_QUALIFIER: &str = "com";
pub const PROJECT_ORGANIZATION: &str = "country-grid";
pub const PROJECT_APPLICATION: &str = "country-grid";

/// Configuration file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "grid.toml";

/// Rolling log file prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "country-grid.log";
