//! CLI command handlers

pub mod commands;

pub use commands::{export, layout, load_config, load_request, validate};
