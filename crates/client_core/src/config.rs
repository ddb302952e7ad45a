use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:5000";
pub const CONFIG_FILE_NAME: &str = "predictor.toml";
const CONFIG_DIR_NAME: &str = "diabetes_predictor";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid prediction service url '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    /// Base URL of the prediction service; `/predict` is joined onto it.
    pub predict_url: Url,
    /// `None` waits for the service indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            predict_url: Url::parse(DEFAULT_PREDICT_URL).expect("default predict url is valid"),
            request_timeout: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    predict_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl ClientSettings {
    pub fn with_predict_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.predict_url = parse_predict_url(raw)?;
        Ok(self)
    }

    fn apply_file(&mut self, file: FileSettings) -> Result<(), ConfigError> {
        if let Some(raw) = file.predict_url {
            self.predict_url = parse_predict_url(&raw)?;
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout = timeout_from_secs(secs);
        }
        Ok(())
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(v) = lookup("PREDICTOR_URL") {
            self.predict_url = parse_predict_url(&v)?;
        }
        if let Some(v) = lookup("APP__PREDICT_URL") {
            self.predict_url = parse_predict_url(&v)?;
        }

        if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
            let secs = v
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "APP__REQUEST_TIMEOUT_SECS",
                    value: v.clone(),
                })?;
            self.request_timeout = timeout_from_secs(secs);
        }

        Ok(())
    }
}

/// Defaults, then the config file (if any), then environment overrides.
pub fn load_settings() -> Result<ClientSettings, ConfigError> {
    load_settings_from(locate_config_file().as_deref())
}

pub fn load_settings_from(path: Option<&Path>) -> Result<ClientSettings, ConfigError> {
    let mut settings = ClientSettings::default();

    if let Some(path) = path {
        settings.apply_file(read_file_settings(path)?)?;
    }
    settings.apply_env(|key| {
        std::env::var(key)
            .ok()
            .filter(|value| !value.trim().is_empty())
    })?;

    Ok(settings)
}

/// Layered settings plus the command-line overrides both binaries accept.
pub fn resolve_settings(
    config_path: Option<&Path>,
    url_override: Option<&str>,
) -> Result<ClientSettings, ConfigError> {
    let settings = match config_path {
        Some(path) => load_settings_from(Some(path))?,
        None => load_settings()?,
    };
    match url_override {
        Some(url) => settings.with_predict_url(url),
        None => Ok(settings),
    }
}

fn locate_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

fn read_file_settings(path: &Path) -> Result<FileSettings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_predict_url(raw: &str) -> Result<Url, ConfigError> {
    let raw = raw.trim();
    let url = Url::parse(raw).map_err(|err| ConfigError::InvalidUrl {
        value: raw.to_string(),
        reason: err.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidUrl {
            value: raw.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
