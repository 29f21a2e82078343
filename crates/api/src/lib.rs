//! HTTP API layer for hospidex.
//!
//! This crate provides the REST API:
//!
//! - **Endpoints**: folder, file, and upload routes under `/api`
//! - **State**: shared service handles threaded through Axum state
//! - **Responses**: JSON response types and the catch-all 404
//!
//! Built on Axum 0.8 with Tower middleware stack.

pub mod endpoints;
pub mod response;
pub mod state;

pub use endpoints::router;
pub use response::route_not_found;
pub use state::AppState;
