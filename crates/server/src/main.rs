//! Hospidex server entry point.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{Json, Router, routing::get};
use hospidex_api::{AppState, route_not_found, router as api_router};
use hospidex_common::Config;
use hospidex_core::{BlobService, FileService, FolderService, LocalBlobStore, UploadService};
use hospidex_db::repositories::{FileRepository, FolderRepository};
use serde_json::{Value, json};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// On Unix systems, this listens for both SIGINT (Ctrl+C) and SIGTERM.
/// On Windows, this only listens for Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

/// Health check handler.
async fn health() -> Json<Value> {
    Json(json!({
        "message": "Hospital Document Explorer API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hospidex=debug,tower_http=debug".into()),
        )
        .init();

    dotenvy::dotenv().ok();

    info!("Starting hospidex server...");

    // Load configuration
    let config = Config::load()?;

    // Connect to database
    let db = hospidex_db::init(&config).await?;
    info!("Connected to database");

    // Run migrations
    info!("Running database migrations...");
    hospidex_db::migrate(&db).await?;
    info!("Migrations completed");

    // Initialize repositories
    let db = Arc::new(db);
    let folder_repo = FolderRepository::new(Arc::clone(&db));
    let file_repo = FileRepository::new(Arc::clone(&db));

    // Initialize blob storage when configured; uploads record placeholder
    // paths otherwise
    let blob: Option<BlobService> = config.storage.as_ref().map(|s| {
        Arc::new(LocalBlobStore::new(
            PathBuf::from(&s.path),
            s.base_url.clone(),
        )) as BlobService
    });
    if blob.is_some() {
        info!("Blob storage configured");
    } else {
        info!("Blob storage not configured, uploads will record placeholder paths");
    }

    // Initialize services
    let folder_service = FolderService::new(folder_repo);
    let file_service = FileService::new(file_repo.clone(), blob.clone());
    let upload_service = UploadService::new(file_repo, blob);

    // Create app state
    let state = AppState {
        folder_service,
        file_service,
        upload_service,
    };

    // Build router
    let app = Router::new()
        .route("/", get(health))
        .nest("/api", api_router())
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server with graceful shutdown
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
