//! Dataset Loader
//!
//! Connects a record source to the grid. A successful fetch replaces the
//! dataset; a failed one leaves it untouched and surfaces a warning.

use crate::domain::view::GridView;
use crate::services::source::RecordSource;
use crate::states::GridController;

/// Fetch from `source` and load the result into `grid`
pub async fn fetch_into<S: RecordSource>(grid: &mut GridController, source: &S) -> GridView {
    grid.mark_loading();

    match source.fetch().await {
        Ok(records) => {
            tracing::info!("Fetched {} records from {}", records.len(), source.describe());
            grid.load_records(&records)
        }
        Err(err) => grid.fail_load(err.to_string()),
    }
}
