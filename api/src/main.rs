use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenvy::dotenv;
use log::info;

use bc_api::app::{self, AppState};
use bc_api::middleware::cors::create_cors;
use bc_core::services::rotation::{RotatingCodeCache, RotatingCodeConfig};
use bc_core::services::token::{TokenService, TokenServiceConfig};
use bc_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Basecamp API Server");

    // Load configuration
    let config = AppConfig::from_env();

    if config.auth.jwt.is_using_default_secret() {
        log::warn!("JWT_SECRET is not set; relay tokens are signed with the development secret");
    }
    if config.auth.twofa_password.is_empty() {
        log::warn!("TWOFA_PASSWORD is not set; display authentication will reject every attempt");
    }

    // Wire up services
    let codes = Arc::new(RotatingCodeCache::new(RotatingCodeConfig::from(
        &config.rotation,
    ))?);
    codes.start_sweeper();

    let tokens = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));

    let state = web::Data::new(AppState {
        codes,
        tokens,
        auth: config.auth.clone(),
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        let cors = create_cors();

        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(app::configure)
            .default_service(web::route().to(app::not_found))
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
