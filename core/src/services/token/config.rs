//! Configuration for the relay token service

use bc_shared::config::JwtConfig;

use crate::domain::entities::token::DEFAULT_TOKEN_EXPIRY_HOURS;

/// Configuration for the relay token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret used for HS256 signing
    pub jwt_secret: String,

    /// Relay token lifetime in seconds
    pub token_expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("change-me-in-production"),
            token_expiry_seconds: DEFAULT_TOKEN_EXPIRY_HOURS * 3600,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            token_expiry_seconds: config.token_expiry_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expiry_matches_display_session() {
        let config = TokenServiceConfig::default();
        assert_eq!(config.token_expiry_seconds, 43_200);
    }

    #[test]
    fn test_from_jwt_config() {
        let jwt = JwtConfig::new("secret").with_expiry_hours(2);
        let config = TokenServiceConfig::from(&jwt);
        assert_eq!(config.jwt_secret, "secret");
        assert_eq!(config.token_expiry_seconds, 7200);
    }
}
