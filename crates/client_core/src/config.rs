use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use tracing::warn;

use crate::{error::ClientError, router::DEFAULT_BASE_URL};

pub const SETTINGS_FILE: &str = "anecdotes.toml";
pub const DEFAULT_NOTIFICATION_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub notification_ms: u64,
    pub seed_anecdotes: bool,
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notification_ms: DEFAULT_NOTIFICATION_MS,
            seed_anecdotes: true,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    notification_ms: Option<u64>,
    seed_anecdotes: Option<bool>,
    base_url: Option<String>,
}

impl Settings {
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    /// Applies environment overrides. For every setting the `APP__` variable
    /// wins over the `ANECDOTES_` one.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for name in ["ANECDOTES_NOTIFICATION_MS", "APP__NOTIFICATION_MS"] {
            if let Some(v) = lookup(name) {
                match v.trim().parse::<u64>() {
                    Ok(parsed) => self.notification_ms = parsed,
                    Err(err) => warn!("ignoring {name}={v:?}: {err}"),
                }
            }
        }

        for name in ["ANECDOTES_SEED", "APP__SEED"] {
            if let Some(v) = lookup(name) {
                match parse_flag(&v) {
                    Some(parsed) => self.seed_anecdotes = parsed,
                    None => warn!("ignoring {name}={v:?}: expected true/false"),
                }
            }
        }

        for name in ["ANECDOTES_BASE_URL", "APP__BASE_URL"] {
            if let Some(v) = lookup(name) {
                if v.trim().is_empty() {
                    warn!("ignoring empty {name}");
                } else {
                    self.base_url = v.trim().to_string();
                }
            }
        }
    }

    fn apply_file(&mut self, file: FileSettings) {
        if let Some(v) = file.notification_ms {
            self.notification_ms = v;
        }
        if let Some(v) = file.seed_anecdotes {
            self.seed_anecdotes = v;
        }
        if let Some(v) = file.base_url {
            self.base_url = v;
        }
    }
}

/// Defaults, then `anecdotes.toml` in the working directory when present,
/// then environment variables. A broken settings file is logged and skipped.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    match read_settings_file(Path::new(SETTINGS_FILE)) {
        Ok(Some(file)) => settings.apply_file(file),
        Ok(None) => {}
        Err(err) => warn!("{err}; falling back to default settings"),
    }

    settings.apply_env(|name| std::env::var(name).ok());
    settings
}

/// Like [`load_settings`] but for an explicitly requested file, which must
/// exist and parse.
pub fn load_settings_from(path: &Path) -> Result<Settings, ClientError> {
    let file = read_settings_file(path)?.ok_or_else(|| ClientError::SettingsRead {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::NotFound, "settings file not found"),
    })?;

    let mut settings = Settings::default();
    settings.apply_file(file);
    settings.apply_env(|name| std::env::var(name).ok());
    Ok(settings)
}

pub fn parse_settings(raw: &str, path: &Path) -> Result<Settings, ClientError> {
    let mut settings = Settings::default();
    settings.apply_file(parse_file(raw, path)?);
    Ok(settings)
}

fn read_settings_file(path: &Path) -> Result<Option<FileSettings>, ClientError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ClientError::SettingsRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse_file(&raw, path).map(Some)
}

fn parse_file(raw: &str, path: &Path) -> Result<FileSettings, ClientError> {
    toml::from_str::<FileSettings>(raw).map_err(|source| ClientError::SettingsParse {
        path: PathBuf::from(path),
        source,
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
