//! Pantry Library
//!
//! This crate provides the core functionality for the pantry settings CLI:
//! persisted user settings, per-setting validation, and the output behavior
//! derived from them at startup.

pub mod cli;
pub mod config;
pub mod output;
