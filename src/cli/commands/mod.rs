//! Command handlers, organized by command group.

pub mod config;
