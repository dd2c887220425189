mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
mod storage_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "DD_CONFIG_DIR";
const DEFAULT_CONFIG_DIRNAME: &str = ".dd";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_SIGN_IN_DELAY_MS: u64 = 1000;
const DEFAULT_SIGN_UP_DELAY_MS: u64 = 1500;
const DEFAULT_RECOVERY_DELAY_MS: u64 = 1000;
const MAX_DELAY_MS: u64 = 60_000;

const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
const MIN_MIN_PASSWORD_LENGTH: usize = 1;
const MAX_MIN_PASSWORD_LENGTH: usize = 128;

const DEFAULT_DURABLE_FILENAME: &str = "session.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
