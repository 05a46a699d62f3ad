//! Configuration for the rotating display-code cache

use chrono::Duration;

use bc_shared::config::RotationConfig;

use crate::errors::{DomainError, DomainResult};

/// Minimum display-code digit width
pub const MIN_CODE_DIGITS: u32 = 4;

/// Maximum display-code digit width (10^9 still fits in a u32)
pub const MAX_CODE_DIGITS: u32 = 9;

/// Configuration for the rotating code cache, fixed at construction
#[derive(Debug, Clone)]
pub struct RotatingCodeConfig {
    /// Width of a single validity window
    pub window: Duration,

    /// Number of decimal digits in a minted code
    pub code_digits: u32,

    /// How many past windows remain valid for verification.
    /// Must be at least 1: with no lookback, retained entries could never
    /// match and a code minted just before a rollover would be dead on
    /// arrival.
    pub retention_windows: u32,

    /// Cadence of the background sweep
    pub sweep_interval: Duration,
}

impl Default for RotatingCodeConfig {
    fn default() -> Self {
        Self {
            window: Duration::seconds(30),
            code_digits: 4,
            retention_windows: 1,
            sweep_interval: Duration::seconds(60),
        }
    }
}

impl RotatingCodeConfig {
    /// Validates the configuration, rejecting unusable values
    pub fn validate(&self) -> DomainResult<()> {
        if self.window <= Duration::zero() {
            return Err(DomainError::configuration("window width must be positive"));
        }
        if !(MIN_CODE_DIGITS..=MAX_CODE_DIGITS).contains(&self.code_digits) {
            return Err(DomainError::configuration(format!(
                "code digit width must be between {} and {}, got {}",
                MIN_CODE_DIGITS, MAX_CODE_DIGITS, self.code_digits
            )));
        }
        if self.retention_windows == 0 {
            return Err(DomainError::configuration(
                "at least one past window must remain valid for verification",
            ));
        }
        if self.sweep_interval <= Duration::zero() {
            return Err(DomainError::configuration(
                "sweep interval must be positive",
            ));
        }
        Ok(())
    }

    /// Smallest valid code (inclusive), e.g. 1000 for 4 digits
    pub fn code_min(&self) -> u32 {
        10u32.pow(self.code_digits - 1)
    }

    /// Upper bound of the code range (exclusive), e.g. 10000 for 4 digits
    pub fn code_max(&self) -> u32 {
        10u32.pow(self.code_digits)
    }

    /// Window width in milliseconds
    pub fn window_millis(&self) -> i64 {
        self.window.num_milliseconds()
    }
}

impl From<&RotationConfig> for RotatingCodeConfig {
    fn from(config: &RotationConfig) -> Self {
        Self {
            window: Duration::seconds(config.window_seconds),
            code_digits: config.code_digits,
            retention_windows: config.retention_windows,
            sweep_interval: Duration::seconds(config.sweep_interval_seconds as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RotatingCodeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_code_range_for_digit_widths() {
        let four = RotatingCodeConfig::default();
        assert_eq!(four.code_min(), 1000);
        assert_eq!(four.code_max(), 10_000);

        let six = RotatingCodeConfig {
            code_digits: 6,
            ..Default::default()
        };
        assert_eq!(six.code_min(), 100_000);
        assert_eq!(six.code_max(), 1_000_000);
    }

    #[test]
    fn test_rejects_non_positive_window() {
        let config = RotatingCodeConfig {
            window: Duration::zero(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RotatingCodeConfig {
            window: Duration::seconds(-30),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_digit_widths() {
        for digits in [0, 3, 10] {
            let config = RotatingCodeConfig {
                code_digits: digits,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{} digits should be rejected", digits);
        }
    }

    #[test]
    fn test_rejects_zero_retention() {
        let config = RotatingCodeConfig {
            retention_windows: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive_sweep_interval() {
        let config = RotatingCodeConfig {
            sweep_interval: Duration::zero(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_shared_rotation_config() {
        let shared = RotationConfig::default()
            .with_window_seconds(45)
            .with_code_digits(6)
            .with_retention_windows(2);

        let config = RotatingCodeConfig::from(&shared);
        assert_eq!(config.window, Duration::seconds(45));
        assert_eq!(config.code_digits, 6);
        assert_eq!(config.retention_windows, 2);
        assert!(config.validate().is_ok());
    }
}
