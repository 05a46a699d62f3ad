//! Application state and route registration.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use bc_core::services::rotation::RotatingCodeCache;
use bc_core::services::token::TokenService;
use bc_shared::config::AuthConfig;
use bc_shared::errors::{error_codes, ErrorResponse};

use crate::middleware::auth::RelayAuth;
use crate::routes::twofa::{authenticate::authenticate, get_code::get_code, validate::validate};

/// Application state that holds shared services
pub struct AppState {
    /// Rotating display-code cache
    pub codes: Arc<RotatingCodeCache>,
    /// Relay token service
    pub tokens: Arc<TokenService>,
    /// Authentication configuration
    pub auth: AuthConfig,
}

/// Registers every route of the 2FA relay surface
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/2fa")
            .service(
                web::resource("")
                    .wrap(RelayAuth)
                    .route(web::get().to(get_code)),
            )
            .route("/authenticate", web::post().to(authenticate))
            .route("/validate", web::post().to(validate)),
    );
}

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "basecamp-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
