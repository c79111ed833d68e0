//! Country Grid Library
//!
//! This crate provides a data-grid state engine: a dataset store with
//! filtering, sorting and pagination behind a single grid controller, plus
//! the source, config and text rendering pieces the `country-grid` binary
//! wires around it.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod helpers;
pub mod services;
pub mod states;
pub mod table;
pub mod utils;
