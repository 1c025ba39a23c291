//! Root and diagnostic endpoints.
//!
//! `/test` reports connectivity as human-readable text in the body and
//! always answers 200, so it stays usable when the store is down.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::AppState;

#[derive(Serialize)]
struct TestResponse {
    backend: String,
    database: String,
    database_url: String,
    database_name: String,
    connection_status: String,
    collections: Vec<String>,
}

/// Create the diagnostics router (served at the root, not under /api)
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/test", get(test_database))
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Food Shop Backend Running" }))
}

async fn test_database(State(state): State<AppState>) -> Json<TestResponse> {
    let mut response = TestResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: env_flag("DATABASE_URL"),
        database_name: env_flag("DATABASE_NAME"),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if let Some(ref db) = state.db {
        response.connection_status = "Connected".to_string();
        match db.list_collection_names().await {
            Ok(collections) => {
                response.collections = collections.into_iter().take(10).collect();
                response.database = "✅ Connected & Working".to_string();
            }
            Err(err) => {
                response.database =
                    format!("⚠️  Connected but Error: {}", truncate(&err.to_string(), 50));
            }
        }
    } else {
        response.database = "⚠️  Available but not initialized".to_string();
    }

    Json(response)
}

fn env_flag(key: &str) -> String {
    let set = std::env::var(key).is_ok_and(|value| !value.is_empty());
    if set { "✅ Set" } else { "❌ Not Set" }.to_string()
}

/// Cut at a char boundary so multi-byte error text cannot panic
fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
