//! Components - Grid Renderers
//!
//! Pure presentation: a renderer reads a `GridView` snapshot and never
//! mutates grid state or does any I/O besides writing its output.

pub mod data_table;

use crate::domain::view::GridView;
use crate::error::Result;

/// Anything that can present a grid snapshot
pub trait Renderer {
    fn render(&mut self, view: &GridView) -> Result<()>;
}

pub use data_table::TextRenderer;
