//! API endpoints.

mod files;
mod folders;
mod upload;

use axum::Router;

use crate::state::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/folders", folders::router())
        .nest("/files", files::router())
        .nest("/upload", upload::router())
}
