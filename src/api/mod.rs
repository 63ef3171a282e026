/// HTTP API Layer
///
/// This module provides the REST endpoints the rendering layer consumes:
/// - Project and note listings
/// - Theme switching
/// - Status badge lookups

// Project and note endpoints
pub mod content;

// Theme and status endpoints
pub mod presentation;

// Re-export router builders
pub use content::{create_content_routes, AppState};
pub use presentation::create_presentation_routes;
