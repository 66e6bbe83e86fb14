//! # GoBuddy API Server
//!
//! Actix-web entry point. Binds the HTTP API and, when the `websocket`
//! feature is on, a side listener for the chat simulator.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;
#[cfg(feature = "websocket")]
mod websocket;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // a .env file is optional
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        host = %config.host,
        port = config.port,
        "Starting GoBuddy API server"
    );

    let state = AppState::new(&config).await;

    #[cfg(feature = "websocket")]
    {
        let host = config.host.clone();
        let chat_port = config.chat_port;
        tokio::spawn(async move {
            if let Err(e) = websocket::serve(&host, chat_port).await {
                tracing::error!(error = %e, "Chat simulator stopped");
            }
        });
    }

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
