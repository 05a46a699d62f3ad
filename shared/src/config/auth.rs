//! Authentication and relay token configuration

use serde::{Deserialize, Serialize};

/// JWT configuration for relay tokens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Relay token expiry time in seconds
    pub token_expiry_seconds: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-me-in-production"),
            token_expiry_seconds: 43_200, // 12 hours - one display session
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set relay token expiry in hours
    pub fn with_expiry_hours(mut self, hours: i64) -> Self {
        self.token_expiry_seconds = hours * 3600;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "change-me-in-production"
    }
}

/// Authentication configuration for the 2FA display surface
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Password required to open a display session.
    /// Empty means unset; every authentication attempt is rejected.
    #[serde(default)]
    pub twofa_password: String,

    /// Relay token configuration
    #[serde(default)]
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let twofa_password = std::env::var("TWOFA_PASSWORD").unwrap_or_default();
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| JwtConfig::default().secret);
        let token_expiry_seconds = std::env::var("TWOFA_TOKEN_EXPIRY_SECONDS")
            .unwrap_or_default()
            .parse()
            .unwrap_or_else(|_| JwtConfig::default().token_expiry_seconds);

        Self {
            twofa_password,
            jwt: JwtConfig {
                secret,
                token_expiry_seconds,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert!(config.is_using_default_secret());
        assert_eq!(config.token_expiry_seconds, 43_200);
    }

    #[test]
    fn test_jwt_config_with_expiry() {
        let config = JwtConfig::new("secret").with_expiry_hours(1);
        assert!(!config.is_using_default_secret());
        assert_eq!(config.token_expiry_seconds, 3600);
    }

    #[test]
    fn test_auth_config_default_password_is_empty() {
        let config = AuthConfig::default();
        assert!(config.twofa_password.is_empty());
    }
}
