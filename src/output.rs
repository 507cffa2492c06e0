//! Output behavior derived from persisted settings.
//!
//! The `labels` and `logo` settings are read once per process start and
//! folded into an [`OutputContext`] value that command handlers receive
//! explicitly; nothing mutates a process-wide formatter afterwards.

use crate::config::{Settings, SettingsStore};

/// Whether output is human-readable or machine-parseable JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Tables and confirmation messages for people.
    #[default]
    Human,
    /// One JSON value per command for machine consumption.
    Json,
}

impl OutputMode {
    /// Build from the global `--json` flag.
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Human
        }
    }

    /// True when output is machine-parseable JSON.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Output behavior for one process, derived fresh from settings at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputContext {
    /// Suppress descriptive field labels (table headers).
    pub terse: bool,
    /// Print the startup banner.
    pub logo_enabled: bool,
}

impl Default for OutputContext {
    fn default() -> Self {
        Self {
            terse: false,
            logo_enabled: true,
        }
    }
}

impl OutputContext {
    /// Derive output behavior from a settings mapping.
    ///
    /// `labels = "off"` turns on terse output; `logo = "off"` disables the
    /// banner. Any other value, including unset, keeps the default: labels
    /// on, logo on.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            terse: settings.get("labels") == Some("off"),
            logo_enabled: settings.get("logo") != Some("off"),
        }
    }
}

/// Apply persisted output switches, once per process start.
///
/// This must never abort startup: if the settings cannot be read, no
/// overrides are applied and the defaults stand.
pub fn apply_global_settings(store: &SettingsStore) -> OutputContext {
    match store.load() {
        Ok(settings) => OutputContext::from_settings(&settings),
        Err(e) => {
            tracing::warn!("could not read settings at startup, using default output: {e}");
            OutputContext::default()
        }
    }
}
