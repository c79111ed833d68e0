//! Application Layer
//!
//! Command-line parsing, logging setup, and the console loop.

pub mod application;
pub mod cli;
pub mod logging;
