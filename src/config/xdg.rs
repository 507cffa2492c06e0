//! XDG Base Directory support.

use std::path::PathBuf;

/// XDG directory paths for Pantry.
pub struct XdgDirs {
    /// Config directory (~/.config/pantry or XDG_CONFIG_HOME/pantry)
    pub config: PathBuf,
}

impl XdgDirs {
    /// Get XDG directories, respecting environment variables.
    pub fn new() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));

        Self {
            config: std::env::var("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| home.join(".config"))
                .join("pantry"),
        }
    }

    /// Path of the persisted settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.config.join("settings.json")
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
