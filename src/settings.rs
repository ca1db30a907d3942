//! Driver settings
//!
//! Stored as JSON next to the save files. Missing fields take their defaults,
//! so older settings files keep working.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Settings for the headless driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where `--save` writes when no path is given
    pub save_path: PathBuf,
    /// Arena loaded when no `--load` path is given
    pub initial_path: PathBuf,

    // === Timing ===
    /// Wall-clock pause between ticks in realtime mode
    pub tick_interval_ms: u64,
    /// Minimum ticks between two demo-driver shots
    pub fire_cooldown_ticks: u64,

    /// Seed for the demo driver's command stream
    pub demo_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from("./data/tankGameSaveFile.json"),
            initial_path: PathBuf::from("./data/tankGameInitialGameFile.json"),

            tick_interval_ms: 15,
            fire_cooldown_ticks: 15,

            demo_seed: 0,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings to `path` as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
