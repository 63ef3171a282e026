/// Content REST API endpoints
///
/// Read-only listings of projects and notes. Every request goes straight to
/// the configured content source; remote sources hit the network each time.

use crate::{content::ContentSource, graphql::ClientError};
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Where projects and notes come from
    pub content: Arc<ContentSource>,
}

/// Create content routes
pub fn create_content_routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(list_projects))
        .route("/api/notes", get(list_notes))
}

/// List all projects
///
/// GET /api/projects
/// Returns: { "projects": [{ "id": "...", "title": "...", "status": "production", ... }] }
async fn list_projects(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    match state.content.projects().await {
        Ok(projects) => {
            tracing::debug!("📦 Serving {} projects", projects.len());
            Ok(Json(json!({ "projects": projects })))
        }
        Err(e) => Err(content_failure("projects", e)),
    }
}

/// List all notes, newest first for the local catalog
///
/// GET /api/notes
/// Returns: { "notes": [{ "id": "...", "title": "...", "url": "...", "date": "2025-07" }] }
async fn list_notes(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    match state.content.notes().await {
        Ok(notes) => {
            tracing::debug!("📝 Serving {} notes", notes.len());
            Ok(Json(json!({ "notes": notes })))
        }
        Err(e) => Err(content_failure("notes", e)),
    }
}

/// Log a content failure and map it to 502: the upstream endpoint let us down
fn content_failure(what: &str, error: ClientError) -> StatusCode {
    if error.is_missing_data() {
        tracing::warn!("❌ Upstream response had no {}: {}", what, error);
    } else {
        tracing::error!("❌ Failed to load {}: {}", what, error);
    }
    StatusCode::BAD_GATEWAY
}
