use actix_web::{web, HttpResponse};
use constant_time_eq::constant_time_eq;
use validator::Validate;

use crate::app::AppState;
use crate::dto::twofa::{AuthenticateRequest, AuthenticateResponse};
use crate::handlers::error::{handle_domain_error, unauthorized};

/// Handler for POST /2fa/authenticate
///
/// Opens a display session: checks the shared display password and issues a
/// relay token on success.
///
/// # Request Body
///
/// ```json
/// { "password": "..." }
/// ```
///
/// # Response
///
/// ## Success (202 Accepted)
/// ```json
/// { "message": "Accepted", "token": "eyJhbGciOiJIUzI1NiIs..." }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: missing, empty, or wrong password, or no password
///   configured
pub async fn authenticate(
    state: web::Data<AppState>,
    request: web::Json<AuthenticateRequest>,
) -> HttpResponse {
    // An empty password is just a bad credential, not a validation error
    if request.validate().is_err() {
        return unauthorized();
    }

    let expected = state.auth.twofa_password.as_bytes();
    if expected.is_empty() || !constant_time_eq(request.password.as_bytes(), expected) {
        log::warn!("Display authentication rejected");
        return unauthorized();
    }

    match state.tokens.issue_relay_token() {
        Ok(token) => HttpResponse::Accepted().json(AuthenticateResponse {
            message: "Accepted".to_string(),
            token,
        }),
        Err(error) => handle_domain_error(error),
    }
}
