use crate::{ConfigError, ConfigErrorResult, DEFAULT_DURABLE_FILENAME};

use std::path::Path;

use serde::Deserialize;

/// Where the durable storage scope lives, relative to the config directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub durable_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            durable_file: String::from(DEFAULT_DURABLE_FILENAME),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.durable_file.trim().is_empty() {
            return Err(ConfigError::storage("storage.durable_file cannot be empty"));
        }

        let path = Path::new(&self.durable_file);
        if path.is_absolute() || self.durable_file.contains("..") {
            return Err(ConfigError::storage(
                "storage.durable_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
