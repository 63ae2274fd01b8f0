//! CLI command handlers

pub mod commands;

pub use commands::{convert, exit_code, version_line};
