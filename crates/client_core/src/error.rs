use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to read settings file '{path}': {source}")]
    SettingsRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings file '{path}': {source}")]
    SettingsParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid base url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("base url '{0}' cannot carry application paths")]
    OpaqueBaseUrl(String),
    #[error("cannot resolve location '{href}': {source}")]
    InvalidLocation {
        href: String,
        source: url::ParseError,
    },
}
