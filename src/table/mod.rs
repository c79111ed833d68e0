//! Table - Grid Transform Engines
//!
//! The dataset store plus the three pure stages of the pipeline:
//!
//! ```text
//! source rows ──▶ filter ──▶ sort ──▶ paginate ──▶ page rows
//! ```

pub mod column;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod store;

pub use column::{Column, ColumnSet};
pub use filter::FilterState;
pub use pagination::Page;
pub use store::DatasetStore;
