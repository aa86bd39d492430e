// src/config/settings.rs
use std::path::PathBuf;
use std::time::Duration;
use anyhow::{Result, Context};
use serde::Deserialize;

pub const DEFAULT_API_ORIGIN: &str = "https://hybrid-app-framework.onrender.com";
const ENV_PREFIX: &str = "EQUIPMENT_DASHBOARD";
const APP_DIR: &str = "equipment-dashboard";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_origin: String,
    /// Unset means requests wait indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_origin: DEFAULT_API_ORIGIN.to_string(),
            request_timeout_secs: None,
            download_dir: None,
        }
    }
}

impl Settings {
    /// Defaults, then the optional settings file, then environment overrides.
    pub fn load() -> Result<Self> {
        let file = dirs::config_dir().map(|dir| dir.join(APP_DIR).join("settings.toml"));
        Self::load_from(file)
    }

    pub fn load_from(file: Option<PathBuf>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("api_origin", DEFAULT_API_ORIGIN)?;

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
