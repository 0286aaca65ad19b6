mod errors;
pub(crate) mod model;
mod storage;

use std::path::Path;

pub(crate) use model::ConfigData;
use storage::{ConfigLoadStatus, config_path, load_config_from_path};

/// Load the configuration, falling back to defaults on any failure.
pub(crate) fn load() -> ConfigData {
    load_from(&config_path())
}

fn load_from(path: &Path) -> ConfigData {
    match load_config_from_path(path) {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match status {
                ConfigLoadStatus::Loaded => {
                    log::info!("config loaded from {}", path.display());
                },
                ConfigLoadStatus::Missing => {
                    log::info!(
                        "no config at {}, using defaults",
                        path.display()
                    );
                },
                ConfigLoadStatus::Invalid(message) => {
                    log::warn!(
                        "config at {} is invalid, using defaults: {message}",
                        path.display()
                    );
                },
            }
            config
        },
        Err(err) => {
            log::warn!("config read from {} failed: {err}", path.display());
            ConfigData::default()
        },
    }
}
