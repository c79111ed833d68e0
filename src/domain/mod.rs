//! Domain - Pure Data Structures
//!
//! These types don't depend on I/O and represent the grid's data model.

pub mod config;
pub mod row;
pub mod view;
