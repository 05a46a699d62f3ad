//! Maps domain errors onto HTTP responses.

use actix_web::HttpResponse;

use bc_core::errors::DomainError;
use bc_shared::errors::{error_codes, ErrorResponse};

/// The single 401 body for every authentication failure.
///
/// The message never reveals whether a token or a code was checked, or
/// whether a window existed for the candidate.
pub fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new(
        error_codes::UNAUTHORIZED,
        "Invalid code or token",
    ))
}

/// Converts a domain error into an HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Unauthorized | DomainError::Token(_) => unauthorized(),
        DomainError::Configuration { .. } => {
            log::error!("Configuration error reached a handler: {}", error);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::INTERNAL_ERROR,
                "Service misconfigured",
            ))
        }
        DomainError::Internal { .. } => {
            log::error!("Internal error: {}", error);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::INTERNAL_ERROR,
                "Internal server error",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use bc_core::errors::TokenError;

    #[test]
    fn test_unauthorized_status() {
        assert_eq!(unauthorized().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_token_errors_map_to_unauthorized() {
        let response = handle_domain_error(TokenError::TokenExpired.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_errors_map_to_500() {
        let response = handle_domain_error(DomainError::Internal {
            message: "boom".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
