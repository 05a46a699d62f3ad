use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::twofa::{MessageResponse, ValidateRequest};
use crate::handlers::error::unauthorized;

/// Handler for POST /2fa/validate
///
/// Accepts either a relay token or a display code and reports whether it is
/// currently valid. Every failure path returns the same 401 body, so the
/// response does not reveal which kind of credential was checked or why it
/// failed.
///
/// # Request Body
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIs..." }
/// ```
/// or
/// ```json
/// { "code": 1234 }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "Valid" }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: invalid or expired token, stale or unknown code, or
///   an empty body
pub async fn validate(
    state: web::Data<AppState>,
    request: web::Json<ValidateRequest>,
) -> HttpResponse {
    let ValidateRequest { token, code } = request.into_inner();

    let valid = match (token, code) {
        (Some(token), _) => state.tokens.verify_relay_token(&token).is_ok(),
        (None, Some(code)) => state.codes.verify_code(code),
        (None, None) => false,
    };

    if valid {
        HttpResponse::Ok().json(MessageResponse {
            message: "Valid".to_string(),
        })
    } else {
        unauthorized()
    }
}
