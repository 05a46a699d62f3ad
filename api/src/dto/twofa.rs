use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /2fa/authenticate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuthenticateRequest {
    #[validate(length(min = 1))]
    pub password: String,
}

/// Request body for POST /2fa/validate.
///
/// Carries either a relay token or a display code; when both are present the
/// token takes precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u32>,
}

/// Response body for GET /2fa
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeResponse {
    pub code: u32,
}

/// Response body for POST /2fa/authenticate on success
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticateResponse {
    pub message: String,
    pub token: String,
}

/// Generic message response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_request_accepts_token_or_code() {
        let with_token: ValidateRequest =
            serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(with_token.token.as_deref(), Some("abc"));
        assert!(with_token.code.is_none());

        let with_code: ValidateRequest = serde_json::from_str(r#"{"code": 1234}"#).unwrap();
        assert_eq!(with_code.code, Some(1234));
        assert!(with_code.token.is_none());

        let empty: ValidateRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.token.is_none());
        assert!(empty.code.is_none());
    }

    #[test]
    fn test_authenticate_request_rejects_empty_password() {
        let request = AuthenticateRequest {
            password: String::new(),
        };
        assert!(request.validate().is_err());

        let request = AuthenticateRequest {
            password: "hunter2".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
