//! Configuration management.

mod store;
mod xdg;

pub mod validate;

pub use store::{Settings, SettingsError, SettingsStore};
pub use xdg::XdgDirs;
