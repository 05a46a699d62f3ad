//! Rotating display-code configuration

use serde::{Deserialize, Serialize};

/// Configuration for the rotating display code
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RotationConfig {
    /// Width of a validity window in seconds
    #[serde(default = "default_window_seconds")]
    pub window_seconds: i64,

    /// Number of decimal digits in the display code
    #[serde(default = "default_code_digits")]
    pub code_digits: u32,

    /// How many past windows remain valid for verification
    #[serde(default = "default_retention_windows")]
    pub retention_windows: u32,

    /// Cleanup interval for the background sweep in seconds
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            window_seconds: default_window_seconds(),
            code_digits: default_code_digits(),
            retention_windows: default_retention_windows(),
            sweep_interval_seconds: default_sweep_interval_seconds(),
        }
    }
}

impl RotationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            window_seconds: env_or("TWOFA_WINDOW_SECONDS", defaults.window_seconds),
            code_digits: env_or("TWOFA_CODE_DIGITS", defaults.code_digits),
            retention_windows: env_or("TWOFA_RETENTION_WINDOWS", defaults.retention_windows),
            sweep_interval_seconds: env_or(
                "TWOFA_SWEEP_INTERVAL_SECONDS",
                defaults.sweep_interval_seconds,
            ),
        }
    }

    /// Set the window width in seconds
    pub fn with_window_seconds(mut self, seconds: i64) -> Self {
        self.window_seconds = seconds;
        self
    }

    /// Set the display code digit width
    pub fn with_code_digits(mut self, digits: u32) -> Self {
        self.code_digits = digits;
        self
    }

    /// Set the verification lookback in windows
    pub fn with_retention_windows(mut self, windows: u32) -> Self {
        self.retention_windows = windows;
        self
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn default_window_seconds() -> i64 {
    30
}

fn default_code_digits() -> u32 {
    4
}

fn default_retention_windows() -> u32 {
    1
}

fn default_sweep_interval_seconds() -> u64 {
    60 // 1 minute
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_config_default() {
        let config = RotationConfig::default();
        assert_eq!(config.window_seconds, 30);
        assert_eq!(config.code_digits, 4);
        assert_eq!(config.retention_windows, 1);
        assert_eq!(config.sweep_interval_seconds, 60);
    }

    #[test]
    fn test_rotation_config_builders() {
        let config = RotationConfig::default()
            .with_window_seconds(60)
            .with_code_digits(6)
            .with_retention_windows(2);

        assert_eq!(config.window_seconds, 60);
        assert_eq!(config.code_digits, 6);
        assert_eq!(config.retention_windows, 2);
    }

    #[test]
    fn test_rotation_config_deserializes_with_defaults() {
        let config: RotationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.window_seconds, 30);

        let config: RotationConfig =
            serde_json::from_str(r#"{"code_digits": 6}"#).unwrap();
        assert_eq!(config.code_digits, 6);
        assert_eq!(config.retention_windows, 1);
    }
}
