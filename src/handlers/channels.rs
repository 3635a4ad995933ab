/// Channel showcase listing
use actix_web::{web, HttpResponse};
use bson::{doc, Bson, Document};
use serde::Deserialize;

use crate::models::ChannelListResponse;
use crate::AppState;

/// Records served when the caller does not cap the listing.
const DEFAULT_LIMIT: i64 = 12;

#[derive(Debug, Deserialize)]
pub struct ListChannelsQuery {
    pub limit: Option<i64>,
}

/// List channel records for the public showcase.
///
/// Store failures never reach the caller: the marketing page renders an
/// empty grid instead of an error. No sort is applied; storage default
/// order is preserved.
pub async fn list_channels(
    state: web::Data<AppState>,
    query: web::Query<ListChannelsQuery>,
) -> HttpResponse {
    let limit = match query.limit {
        Some(limit) if limit > 0 => limit,
        _ => DEFAULT_LIMIT,
    };

    let documents = match &state.store {
        Some(store) => match store.get_documents("channel", doc! {}, limit).await {
            Ok(documents) => documents,
            Err(e) => {
                tracing::warn!("channel listing failed, serving empty list: {e}");
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    let channels = documents
        .into_iter()
        .map(|document| Bson::Document(normalize_id(document)).into_relaxed_extjson())
        .collect();

    HttpResponse::Ok().json(ChannelListResponse { channels })
}

/// Replace the storage-internal `_id` with its string form under `id`.
/// Documents without an internal identifier pass through unchanged.
fn normalize_id(mut document: Document) -> Document {
    if let Some(id) = document.remove("_id") {
        let id = match id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };
        document.insert("id", id);
    }
    document
}
