//! Service Layer
//!
//! The service layer wraps the grid's only I/O: fetching the dataset.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 DatasetSource                 │
//! │   ┌────────────┐          ┌────────────┐      │
//! │   │ HttpSource │          │ FileSource │      │
//! │   └────────────┘          └────────────┘      │
//! └──────────────────────────────────────────────┘
//!                       │ records
//!                       ▼ fetch_into
//! ┌──────────────────────────────────────────────┐
//! │                GridController                 │
//! └──────────────────────────────────────────────┘
//! ```

mod loader;
mod runtime;
mod source;

pub use loader::*;
pub use runtime::*;
pub use source::*;
