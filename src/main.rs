// src/main.rs
use actix_web::{App, HttpServer, web};
use prism_api::config::Settings;
use prism_api::error::AppResult;
use prism_api::routes::{self, AppState, SERVICE_DESCRIPTION, SERVICE_TITLE};

use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

// --- Main Function ---
#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .json()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting {} ({})",
        SERVICE_TITLE,
        SERVICE_DESCRIPTION
    );

    let settings = Settings::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        e
    })?;
    tracing::info!(
        app_env = %settings.app_env,
        debug = settings.debug,
        host = %settings.host,
        port = settings.port,
        openai_model = %settings.openai_model,
        storage_path = %settings.storage_path.display(),
        "Configuration loaded"
    );

    let app_state = Arc::new(AppState { settings });
    let bind_addr = {
        let (host, port) = app_state.settings.bind_addr();
        (host.to_string(), port)
    };

    tracing::info!("Starting HTTP server on {}:{}", bind_addr.0, bind_addr.1);
    let state = app_state.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors())
            .wrap(routes::request_logger(&state.settings))
            .app_data(web::Data::new(state.clone())) // Clone Arc for each worker
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}
