/// Marketing Service Library
///
/// Public-facing backend for the B2B streaming platform marketing site.
/// Serves the channel showcase, accepts demo-request form submissions and
/// reports database connectivity for operators.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for the public endpoints
/// - `db`: document store access layer
/// - `schema`: declarative record schemas and payload validation
/// - `models`: request/response payload types
/// - `error`: error types and handling
/// - `config`: configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod schema;

pub use config::Config;
pub use error::{AppError, Result};

use std::sync::Arc;

use db::DocumentStore;

/// Shared application state, built once at startup and injected into every
/// handler. `store` is `None` when the database is not configured or could
/// not be reached; handlers degrade per-endpoint instead of failing.
#[derive(Clone)]
pub struct AppState {
    pub store: Option<Arc<dyn DocumentStore>>,
}
