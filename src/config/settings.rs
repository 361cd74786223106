use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::{RatingError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub display: DisplaySettings,
    pub source: SourceSettings,
    pub tui: TuiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub output_format: OutputFormat,
    /// Colorize terminal output with the tier palette
    pub color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    /// JSON export read by `report` when no `--input` is given
    pub profiles_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiSettings {
    pub tick_rate_ms: u64,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "CodeWizard Rating".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
                environment: Environment::Development,
            },
            display: DisplaySettings {
                output_format: OutputFormat::Text,
                color: true,
            },
            source: SourceSettings {
                profiles_path: "data/profiles.json".to_string(),
            },
            tui: TuiSettings { tick_rate_ms: 250 },
        }
    }
}

impl Settings {
    /// Defaults, then `config/default`, `config/local`, then
    /// `CODEWIZARD__SECTION__KEY` environment variables.
    pub fn new() -> Result<Self> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("CODEWIZARD")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(s.try_deserialize()?)
    }

    /// Like [`Settings::new`], but falls back to the defaults when a source
    /// fails to load. The error is handed back so the caller can report it
    /// once logging is up.
    pub fn load() -> (Self, Option<RatingError>) {
        match Self::new() {
            Ok(settings) => (settings, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        Ok(s.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.app.log_level.to_lowercase().as_str()) {
            return Err(RatingError::Config(format!(
                "Unknown log level '{}', expected one of {}",
                self.app.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        if self.tui.tick_rate_ms == 0 {
            return Err(RatingError::Config("TUI tick rate must be positive".to_string()));
        }

        if self.source.profiles_path.trim().is_empty() {
            return Err(RatingError::Config("Profiles path must not be empty".to_string()));
        }

        Ok(())
    }
}
