use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::twofa::CodeResponse;

/// Handler for GET /2fa
///
/// Returns the display code for the current window, minting one if the
/// window has none yet. Repeated calls within the same window return the
/// same code, so the display can poll on the window cadence without the
/// value jittering.
///
/// Guarded by [`RelayAuth`](crate::middleware::auth::RelayAuth); only an
/// authenticated display session reaches this handler.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "code": 1234 }
/// ```
pub async fn get_code(state: web::Data<AppState>) -> HttpResponse {
    let code = state.codes.get_or_create_code();
    HttpResponse::Ok().json(CodeResponse { code })
}
