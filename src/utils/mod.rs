//! Utilities - Config persistence and text formatting

mod config_store;
mod format;

pub use config_store::*;
pub use format::*;
