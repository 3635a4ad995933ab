/// Request and response payload types for the public endpoints.
///
/// Channel listing passes stored documents through as-is (after identifier
/// normalization), so the list response carries raw JSON values rather than
/// typed records.
use serde::Serialize;
use serde_json::Value;

use crate::schema::RecordSchema;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ChannelListResponse {
    pub channels: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct DemoRequestResponse {
    pub status: &'static str,
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct SchemaCatalogResponse {
    pub schemas: Vec<RecordSchema>,
}

/// Status object returned by the diagnostic endpoint. Every field is a
/// human-readable status string; failures are encoded here rather than as
/// HTTP errors.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
