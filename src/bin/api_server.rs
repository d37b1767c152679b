// src/bin/api_server.rs

use song_library::infra::logging;
use song_library::transport;
use song_library::{Config, MusicInfoClient, PostgresSongStore, SongService};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    logging::init(config.env);
    tracing::info!(env = ?config.env, "starting song library");

    // --- Storage ---
    let store = PostgresSongStore::connect(&config.database_url, config.db_max_connections).await?;
    tracing::info!(max_connections = config.db_max_connections, "connected to postgres, schema ready");

    // --- External lookup ---
    let music_info = MusicInfoClient::new(config.music_server.clone())?;
    tracing::info!(base_url = %music_info.base_url(), "music info client ready");

    let app_state = transport::http::AppState::new(SongService::new(Arc::new(store), Arc::new(music_info)));

    // --- API Server ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(TimeoutLayer::new(config.timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    tracing::info!(address = %config.server_address, "API server listening");
    tracing::info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
            tracing::info!("shutdown signal received");
        })
        .await?;

    tracing::info!("graceful shutdown complete");
    Ok(())
}
