//! Eventing - Command Messages
//!
//! Commands flowing from drivers into the grid controller.

mod console_command;
mod grid_command;

pub use console_command::*;
pub use grid_command::*;
