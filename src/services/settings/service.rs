use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

const SETTINGS_FILE: &str = "settings.toml";

/// Loads and stores engine settings as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to `settings.toml` in the platform config directory.
    pub fn from_default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "KenBoyle", "RustCalendarEngine")
            .context("Failed to determine config directory")?;
        Ok(Self::new(dirs.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings. A missing file yields defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::debug!("No settings at {}, using defaults", self.path.display());
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;

        if let Err(err) = settings.validate() {
            log::warn!("Invalid settings in {}: {}", self.path.display(), err);
            return Err(anyhow!("Invalid settings in {}: {}", self.path.display(), err));
        }

        Ok(settings)
    }

    /// Validate and write settings, creating the parent directory if needed.
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    pub fn reset(&self) -> Result<()> {
        self.update(&Settings::default())
    }
}
