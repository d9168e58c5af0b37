//! Main entry point for the uniform swap backend server.
//! This crate wires the stores and services together, exposes the REST API and
//! optionally serves the frontend application.

use std::sync::Arc;

use actix_files::Files;
use actix_web::{App, HttpServer, middleware::Logger, web};

use auth_services::IdentityGate;
use notification_services::{
    LogSmsProvider, RecoveryService, SmsProvider, SnsSmsProvider, TermiiSmsProvider,
};
use postgres::PgSwapRequestStore;
use postgres::database::*;
use swap_requests::{InMemorySwapRequestStore, MatchingEngine, RequestService, SwapRequestStore};
use web_handlers::configure_routes;

mod config;
use config::{ServerConfig, SmsBackend, StoreBackend};

async fn create_store(config: &ServerConfig) -> Arc<dyn SwapRequestStore> {
    match config.store_backend {
        StoreBackend::Memory => {
            log::warn!("🧪 Using the in-memory store; requests are lost on restart");
            Arc::new(InMemorySwapRequestStore::new())
        }
        StoreBackend::Postgres => {
            let pool = match create_connection_pool(&config.database_url).await {
                Ok(pool) => {
                    log::info!("🗃️ Database pool created successfully");

                    if let Err(e) = test_connection(&pool).await {
                        log::error!("❌ Database connection test failed: {}", e);
                    }
                    pool
                }
                Err(e) => {
                    log::error!("❌ Failed to create database pool: {}", e);
                    log::error!("💡 Check DATABASE_URL or set STORE_BACKEND=memory");
                    std::process::exit(1);
                }
            };

            if let Err(e) = ensure_schema(&pool).await {
                log::error!("❌ Failed to prepare database schema: {}", e);
                std::process::exit(1);
            }

            Arc::new(PgSwapRequestStore::new(pool))
        }
    }
}

async fn create_sms_provider(config: &ServerConfig) -> Arc<dyn SmsProvider> {
    match config.sms_backend {
        SmsBackend::Termii => {
            if config.termii.api_key.is_none() {
                log::warn!("🔧 TERMII_API_KEY is not set; SMS recovery will be unavailable");
            }
            log::info!("📱 SMS recovery via Termii ({})", config.termii.base_url);
            Arc::new(TermiiSmsProvider::new(config.termii.clone()))
        }
        SmsBackend::Sns => {
            log::info!("📱 SMS recovery via AWS SNS");
            Arc::new(SnsSmsProvider::new(config.termii.sender_id.clone()).await)
        }
        SmsBackend::Log => {
            log::warn!("📱 SMS messages will only be logged");
            Arc::new(LogSmsProvider)
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("🚀 Starting uniform swap server...");

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let store = create_store(&config).await;
    let sms = create_sms_provider(&config).await;

    let request_service = web::Data::new(RequestService::new(store.clone()));
    let matching_engine = web::Data::new(MatchingEngine::new(store.clone()));
    let identity_gate = web::Data::new(IdentityGate::new(store.clone()));
    let recovery_service = web::Data::new(RecoveryService::new(store, sms));

    match &config.frontend_path {
        Some(path) => log::info!("📁 Frontend files location: {}", path),
        None => log::info!("📁 FRONTEND_PATH not set; serving the API only"),
    }
    log::info!("🌐 Server will be available at: http://{}", config.bind_address);

    let frontend_path = config.frontend_path.clone();

    HttpServer::new(move || {
        let app = App::new()
            .app_data(request_service.clone())
            .app_data(matching_engine.clone())
            .app_data(identity_gate.clone())
            .app_data(recovery_service.clone())
            .wrap(Logger::default())
            .configure(configure_routes);

        match &frontend_path {
            Some(path) => app.service(Files::new("/", path).index_file("index.html")),
            None => app,
        }
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
