use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use classifier_engine::{ClassifySettings, DEFAULT_ENDPOINT};
use engine_logging::LogDestination;
use serde::Deserialize;
use thiserror::Error;

pub(crate) const CONFIG_FILENAME: &str = "classifier.ron";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Optional settings read from `classifier.ron`; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub endpoint: String,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub max_response_bytes: u64,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = ClassifySettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_secs: None,
            request_timeout_secs: None,
            max_response_bytes: settings.max_bytes,
            log_file: PathBuf::from("./classifier.log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub(crate) fn classify_settings(&self) -> ClassifySettings {
        ClassifySettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_bytes: self.max_response_bytes,
        }
    }

    /// The terminal belongs to the UI, so logs only go to the file.
    pub(crate) fn log_destination(&self) -> LogDestination {
        LogDestination::File(self.log_file.clone())
    }
}

/// Loads `classifier.ron` from `dir`. A missing file yields the defaults.
pub(crate) fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path,
        message: err.to_string(),
    })
}
