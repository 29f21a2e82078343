//! API response types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

/// Body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    /// Create a success body.
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

impl IntoResponse for SuccessResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Catch-all handler for unmatched routes.
pub async fn route_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
        .into_response()
}
