use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRNAME,
    LoggingConfig, SessionConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for DD_CONFIG_DIR env var, else use ./.dd/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply DD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: DD_CONFIG_DIR env var > ./.dd/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRNAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.session.validate()?;
        self.storage.validate()?;

        Ok(())
    }

    /// Absolute path of the file backing the durable storage scope.
    pub fn durable_storage_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.durable_file))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        debug!("Configuration loaded:");
        debug!(
            "  session: sign_in={}ms, sign_up={}ms, recovery={}ms, min_password={}",
            self.session.sign_in_delay_ms,
            self.session.sign_up_delay_ms,
            self.session.recovery_delay_ms,
            self.session.min_password_length
        );
        debug!("  avatars: {}", self.session.avatar_base_url);
        debug!("  storage: durable={}", self.storage.durable_file);
        debug!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Session
        Self::apply_env_parse(
            "DD_SESSION_SIGN_IN_DELAY_MS",
            &mut self.session.sign_in_delay_ms,
        );
        Self::apply_env_parse(
            "DD_SESSION_SIGN_UP_DELAY_MS",
            &mut self.session.sign_up_delay_ms,
        );
        Self::apply_env_parse(
            "DD_SESSION_RECOVERY_DELAY_MS",
            &mut self.session.recovery_delay_ms,
        );
        Self::apply_env_parse(
            "DD_SESSION_MIN_PASSWORD_LENGTH",
            &mut self.session.min_password_length,
        );
        Self::apply_env_string(
            "DD_SESSION_AVATAR_BASE_URL",
            &mut self.session.avatar_base_url,
        );

        // Storage
        Self::apply_env_string("DD_STORAGE_DURABLE_FILE", &mut self.storage.durable_file);

        // Logging
        Self::apply_env_parse("DD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("DD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("DD_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
