/// Folio: portfolio content service
///
/// Serves portfolio projects and notes from either a compiled-in catalog or a
/// remote GraphQL endpoint, plus the theme and status helpers the site uses.

// Core configuration and setup
pub mod config;

// GraphQL data client - fixed query documents against a single endpoint
pub mod graphql;

// Content layer - typed records, local catalog, source selection
pub mod content;

// Presentation helpers - theme switching and status badges
pub mod presentation;

// HTTP API layer - JSON endpoints for the rendering layer
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use content::{Catalog, ContentSource, Note, Project, ProjectStatus};
pub use graphql::{ClientError, GraphQLClient};
pub use presentation::{next_theme, status_config, StatusLabel};
pub use server::start_server;
