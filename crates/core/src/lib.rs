//! Core business logic for hospidex.

pub mod services;

pub use services::*;
