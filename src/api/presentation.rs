/// Presentation REST API endpoints
///
/// Theme switching and status badge lookups for the rendering layer.

use crate::{
    api::content::AppState,
    presentation::{next_theme, status_config, StatusLabel, THEMES},
};
use axum::{
    extract::{Path, Query},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

/// Query string for theme switching
#[derive(Debug, Deserialize)]
pub struct ThemeQuery {
    /// Theme currently shown; missing or unknown means "any"
    #[serde(default)]
    pub current: String,
}

/// Create presentation routes
pub fn create_presentation_routes() -> Router<AppState> {
    Router::new()
        .route("/api/theme", get(pick_theme))
        .route("/api/themes", get(list_themes))
        .route("/api/status/{status}", get(get_status_label))
}

/// Pick the next theme
///
/// GET /api/theme?current=nord
/// Returns: { "theme": "sunset" }
async fn pick_theme(Query(query): Query<ThemeQuery>) -> Json<Value> {
    let theme = next_theme(&query.current);
    tracing::debug!("🎨 Theme switch: '{}' -> '{}'", query.current, theme);
    Json(json!({ "theme": theme }))
}

/// List every available theme
///
/// GET /api/themes
/// Returns: { "themes": ["corporate", "synthwave", ...] }
async fn list_themes() -> Json<Value> {
    Json(json!({ "themes": THEMES }))
}

/// Status badge for a project status
///
/// GET /api/status/:status
/// Returns: { "color": "bg-lime-600", "text": "production" }
async fn get_status_label(Path(status): Path<String>) -> Json<StatusLabel> {
    Json(status_config(&status))
}
