//! Relay token claims for the 2FA display session.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject claim carried by every relay token
pub const RELAY_TOKEN_SUBJECT: &str = "attendance-2fa";

/// Issuer claim for all tokens signed by this service
pub const JWT_ISSUER: &str = "basecamp";

/// Default relay token lifetime (one display session)
pub const DEFAULT_TOKEN_EXPIRY_HOURS: i64 = 12;

/// JWT claims for a relay token.
///
/// A relay token is handed out once the display password has been presented
/// and authorizes polling `GET /2fa` for the duration of a display session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayClaims {
    /// Subject - always [`RELAY_TOKEN_SUBJECT`] for tokens minted here
    pub sub: String,

    /// Issuer
    pub iss: String,

    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,

    /// Unique token identifier
    pub jti: String,
}

impl RelayClaims {
    /// Creates claims for a fresh relay token expiring after `expiry_seconds`
    pub fn new(expiry_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: RELAY_TOKEN_SUBJECT.to_string(),
            iss: JWT_ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expiry_seconds)).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks that the subject identifies a relay token
    pub fn is_relay_subject(&self) -> bool {
        self.sub == RELAY_TOKEN_SUBJECT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_relay_claims() {
        let claims = RelayClaims::new(3600);

        assert_eq!(claims.sub, RELAY_TOKEN_SUBJECT);
        assert_eq!(claims.iss, JWT_ISSUER);
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(claims.is_relay_subject());
    }

    #[test]
    fn test_jti_is_unique() {
        let first = RelayClaims::new(60);
        let second = RelayClaims::new(60);
        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_foreign_subject_is_rejected() {
        let mut claims = RelayClaims::new(60);
        claims.sub = "someone-else".to_string();
        assert!(!claims.is_relay_subject());
    }
}
