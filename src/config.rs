use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{FolioError, FolioResult};

pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Environment variable that overrides `api.base_url`.
pub const API_BASE_ENV: &str = "FOLIO_API_BASE";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub timeline: TimelineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Root of the portfolio backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineConfig {
    /// Dates strictly after this day are shown as "Present".
    #[serde(default = "default_present_cutoff")]
    pub present_cutoff: NaiveDate,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            present_cutoff: default_present_cutoff(),
        }
    }
}

pub fn default_present_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 28).unwrap_or_default()
}

/// Values layered over the loaded file. Later sources win: the
/// environment over the file, command-line flags over both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub env_api_base: Option<String>,
    pub cli_api_base: Option<String>,
    pub cli_cutoff: Option<NaiveDate>,
}

impl ConfigOverrides {
    /// Reads `FOLIO_API_BASE` and combines it with the given flag values.
    pub fn from_env(cli_api_base: Option<String>, cli_cutoff: Option<NaiveDate>) -> Self {
        Self {
            env_api_base: std::env::var(API_BASE_ENV).ok(),
            cli_api_base,
            cli_cutoff,
        }
    }
}

impl AppConfig {
    /// Blank base URLs are skipped so a lower layer stays in effect.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(base) = &overrides.env_api_base {
            self.apply_api_base(base);
        }
        if let Some(base) = &overrides.cli_api_base {
            self.apply_api_base(base);
        }
        if let Some(cutoff) = overrides.cli_cutoff {
            tracing::debug!(cutoff = %cutoff, "present cutoff overridden");
            self.timeline.present_cutoff = cutoff;
        }
    }

    pub fn apply_api_base(&mut self, base: &str) {
        let base = base.trim().trim_end_matches('/');
        if !base.is_empty() {
            tracing::debug!(base_url = %base, "api base overridden");
            self.api.base_url = base.to_string();
        }
    }
}

fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(parent) = exe.parent() {
            let candidate = parent.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "config found next to executable");
                return Some(candidate);
            }
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        let candidate = cwd.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "config found in working directory");
            return Some(candidate);
        }
    }

    if let Some(dir) = dirs::config_dir() {
        let candidate = dir.join("folio").join(CONFIG_FILE_NAME);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "config found in user config directory");
            return Some(candidate);
        }
    }

    None
}

/// Loads the config from `explicit` or the first file found on the search
/// path. Only an explicit path is required to exist.
pub fn load_config(explicit: Option<&Path>) -> FolioResult<AppConfig> {
    let path = match explicit {
        Some(p) if !p.exists() => {
            return Err(FolioError::Config(format!(
                "config file {} does not exist",
                p.display()
            )));
        }
        Some(p) => p.to_path_buf(),
        None => match resolve_config_path() {
            Some(p) => p,
            None => {
                tracing::info!("no {CONFIG_FILE_NAME} found, using defaults");
                return Ok(AppConfig::default());
            }
        },
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> FolioResult<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    tracing::info!(
        path = %path.display(),
        base_url = %config.api.base_url,
        cutoff = %config.timeline.present_cutoff,
        "config loaded"
    );
    Ok(config)
}

pub fn save_config(config: &AppConfig, path: &Path) -> FolioResult<()> {
    let content = toml::to_string_pretty(config)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
