/// Root health probe and database diagnostic
use actix_web::{web, HttpResponse};

use crate::models::{DiagnosticsResponse, HealthResponse};
use crate::AppState;

/// Collections listed by the diagnostic report, at most.
const MAX_LISTED_COLLECTIONS: usize = 10;

/// Root health probe. No side effects, cannot fail.
pub async fn read_root() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        message: "B2B Streaming Platform Backend is running",
    })
}

/// Report database availability for operators.
///
/// Each inspection step is individually fault-isolated: failures become
/// descriptive status strings inside an HTTP 200 payload, never an error
/// status. Environment presence is re-read on every call so the report
/// reflects the live deployment.
pub async fn test_database(state: web::Data<AppState>) -> HttpResponse {
    let mut response = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: env_presence("DATABASE_URL"),
        database_name: env_presence("DATABASE_NAME"),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if let Some(store) = &state.store {
        response.database = "✅ Available".to_string();
        response.connection_status = "Connected".to_string();

        match store.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_LISTED_COLLECTIONS);
                response.collections = names;
                response.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                response.database =
                    format!("⚠️  Connected but Error: {}", truncate(&e.to_string(), 50));
            }
        }
    }

    HttpResponse::Ok().json(response)
}

fn env_presence(name: &str) -> String {
    presence_status(std::env::var(name).ok())
}

/// An empty value counts as unset, matching how the deployment scripts
/// clear variables.
fn presence_status(value: Option<String>) -> String {
    let set = value.is_some_and(|v| !v.is_empty());
    let status = if set { "✅ Set" } else { "❌ Not Set" };
    status.to_string()
}

/// Cap a message at `max` characters, respecting char boundaries.
fn truncate(message: &str, max: usize) -> &str {
    match message.char_indices().nth(max) {
        Some((index, _)) => &message[..index],
        None => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_caps_long_messages() {
        let long = "x".repeat(80);
        assert_eq!(truncate(&long, 50).len(), 50);
        assert_eq!(truncate("short", 50), "short");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let message = "é".repeat(60);
        assert_eq!(truncate(&message, 50).chars().count(), 50);
    }

    #[test]
    fn presence_status_reports_set_and_unset() {
        assert_eq!(
            presence_status(Some("mongodb://localhost:27017".to_string())),
            "✅ Set"
        );
        assert_eq!(presence_status(Some(String::new())), "❌ Not Set");
        assert_eq!(presence_status(None), "❌ Not Set");
    }
}
