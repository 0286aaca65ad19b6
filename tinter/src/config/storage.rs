use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::model::ConfigData;

/// How the configuration was obtained.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of reading the configuration file.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: ConfigData,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    pub(crate) fn new(config: ConfigData, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (ConfigData, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

pub(crate) fn load_config_from_path(
    path: &Path,
) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                ConfigData::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = match serde_json::from_str::<serde_json::Value>(&data) {
        Ok(value) => value,
        Err(err) => {
            return Ok(ConfigLoad::new(
                ConfigData::default(),
                ConfigLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    Ok(ConfigLoad::new(
        ConfigData::from_json(&parsed),
        ConfigLoadStatus::Loaded,
    ))
}

pub(crate) fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("tinter")
            .join("settings.json");
    }

    std::env::temp_dir().join("tinter").join("settings.json")
}
