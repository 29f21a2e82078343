//! Common utilities and shared types for hospidex.
//!
//! This crate provides the foundational components used across all hospidex
//! crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{AppError, AppResult};
