/// Demo-request form submission
use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::models::DemoRequestResponse;
use crate::{schema, AppState};

/// Identifier returned when the store cannot take the insert. The public
/// form must never show an error to a prospective customer, so the caller
/// still sees a success envelope.
const FALLBACK_ID: &str = "demo";

/// Accept a demo request from the marketing form.
///
/// The payload is validated against the `demorequest` schema at the parsing
/// boundary; validation failures are the only client-visible errors on this
/// route. Insert failures degrade to the fallback identifier.
pub async fn request_demo(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse> {
    let document = schema::demo_request()
        .validate(&payload)
        .map_err(AppError::Validation)?;

    let id = match insert_demo_request(state.store.as_deref(), &document).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("demo request insert failed, serving fallback id: {e}");
            FALLBACK_ID.to_string()
        }
    };

    Ok(HttpResponse::Ok().json(DemoRequestResponse { status: "ok", id }))
}

async fn insert_demo_request(
    store: Option<&dyn DocumentStore>,
    document: &Value,
) -> Result<String> {
    let store = store.ok_or_else(|| AppError::Database("document store not configured".into()))?;
    let document = bson::to_document(document).map_err(|e| AppError::Internal(e.to_string()))?;
    store.create_document("demorequest", document).await
}
