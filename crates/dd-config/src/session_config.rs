use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MIN_PASSWORD_LENGTH, DEFAULT_RECOVERY_DELAY_MS,
    DEFAULT_SIGN_IN_DELAY_MS, DEFAULT_SIGN_UP_DELAY_MS, MAX_DELAY_MS, MAX_MIN_PASSWORD_LENGTH,
    MIN_MIN_PASSWORD_LENGTH,
};

use std::time::Duration;

use dd_core::DEFAULT_AVATAR_BASE_URL;
use serde::Deserialize;

/// Session manager tuning: simulated latencies and credential rules.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Simulated latency of a sign-in
    pub sign_in_delay_ms: u64,
    /// Simulated latency of a sign-up
    pub sign_up_delay_ms: u64,
    /// Simulated latency of forgot-password, reset-password and verify-email
    pub recovery_delay_ms: u64,
    /// Passwords shorter than this are rejected
    pub min_password_length: usize,
    /// Avatar service; the email is appended as `?seed=`
    pub avatar_base_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sign_in_delay_ms: DEFAULT_SIGN_IN_DELAY_MS,
            sign_up_delay_ms: DEFAULT_SIGN_UP_DELAY_MS,
            recovery_delay_ms: DEFAULT_RECOVERY_DELAY_MS,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            avatar_base_url: String::from(DEFAULT_AVATAR_BASE_URL),
        }
    }
}

impl SessionConfig {
    /// Config with every simulated delay disabled.
    pub fn without_latency() -> Self {
        Self {
            sign_in_delay_ms: 0,
            sign_up_delay_ms: 0,
            recovery_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn sign_in_delay(&self) -> Duration {
        Duration::from_millis(self.sign_in_delay_ms)
    }

    pub fn sign_up_delay(&self) -> Duration {
        Duration::from_millis(self.sign_up_delay_ms)
    }

    pub fn recovery_delay(&self) -> Duration {
        Duration::from_millis(self.recovery_delay_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("sign_in_delay_ms", self.sign_in_delay_ms),
            ("sign_up_delay_ms", self.sign_up_delay_ms),
            ("recovery_delay_ms", self.recovery_delay_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(ConfigError::session(format!(
                    "session.{} must be 0-{}, got {}",
                    name, MAX_DELAY_MS, value
                )));
            }
        }

        if self.min_password_length < MIN_MIN_PASSWORD_LENGTH
            || self.min_password_length > MAX_MIN_PASSWORD_LENGTH
        {
            return Err(ConfigError::session(format!(
                "session.min_password_length must be {}-{}, got {}",
                MIN_MIN_PASSWORD_LENGTH, MAX_MIN_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        if !self.avatar_base_url.starts_with("http://")
            && !self.avatar_base_url.starts_with("https://")
        {
            return Err(ConfigError::session(format!(
                "session.avatar_base_url must be an http(s) URL, got '{}'",
                self.avatar_base_url
            )));
        }

        Ok(())
    }
}
