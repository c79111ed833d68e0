//! State Management Layer
//!
//! The grid controller owns all grid state. Drivers send commands, the
//! controller recomputes, and every command returns a fresh view:
//!
//! ```text
//! Console line → GridCommand → GridController::dispatch → recompute → GridView → Renderer
//! ```

mod grid;

pub use grid::*;
