//! DataTable Component
//!
//! A text data table with a sortable header, a filter row, the current page
//! of rows, and a pagination footer.

pub mod pagination;
pub mod table;

pub use pagination::footer_lines;
pub use table::{TextRenderer, table_lines};
