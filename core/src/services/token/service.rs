//! Relay token signing and verification.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{RelayClaims, JWT_ISSUER};
use crate::errors::{DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service for minting and verifying relay tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Signs a relay token for a freshly authenticated display session
    pub fn issue_relay_token(&self) -> DomainResult<String> {
        let claims = RelayClaims::new(self.config.token_expiry_seconds);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed)?;

        tracing::info!(
            jti = %claims.jti,
            event = "relay_token_issued",
            "Issued relay token for display session"
        );
        Ok(token)
    }

    /// Verifies a relay token and returns its claims.
    ///
    /// Fails on bad signatures, expiry, a foreign issuer, or a foreign
    /// subject; every failure surfaces as a [`TokenError`].
    pub fn verify_relay_token(&self, token: &str) -> DomainResult<RelayClaims> {
        let data = decode::<RelayClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|error| map_jwt_error(&error))?;

        if !data.claims.is_relay_subject() {
            return Err(TokenError::InvalidClaims.into());
        }

        Ok(data.claims)
    }
}

fn map_jwt_error(error: &jsonwebtoken::errors::Error) -> crate::errors::DomainError {
    use jsonwebtoken::errors::ErrorKind;

    let token_error = match error.kind() {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::InvalidToken
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => TokenError::InvalidTokenFormat,
        _ => TokenError::InvalidClaims,
    };
    token_error.into()
}
