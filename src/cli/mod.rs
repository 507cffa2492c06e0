//! Command-line interface handlers.

pub mod commands;
