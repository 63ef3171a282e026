/// Content source selection
///
/// The rendering layer asks for projects and notes without caring whether
/// they come from the compiled catalog or the remote GraphQL endpoint.

use crate::{
    config::{ContentConfig, ContentSourceKind},
    content::{
        catalog::Catalog,
        types::{Note, Project},
    },
    graphql::{
        queries::{NOTES_FIELD, PROJECTS_FIELD},
        ClientError, GraphQLClient, Result,
    },
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Backend serving portfolio content
#[derive(Debug, Clone)]
pub enum ContentSource {
    /// In-repo catalog
    Local(Catalog),
    /// Remote GraphQL endpoint, fetched on every call
    Remote(GraphQLClient),
}

impl ContentSource {
    /// Build the source named by configuration
    pub fn from_config(config: &ContentConfig) -> anyhow::Result<Self> {
        match config.source {
            ContentSourceKind::Local => {
                let catalog = Catalog::builtin()?;
                tracing::info!(
                    "📚 Serving local catalog ({} projects, {} notes)",
                    catalog.projects().len(),
                    catalog.notes().len()
                );
                Ok(Self::Local(catalog))
            }
            ContentSourceKind::Remote => {
                tracing::info!("🌐 Serving content from {}", config.api_url);
                Ok(Self::Remote(GraphQLClient::new(config.api_url.clone())))
            }
        }
    }

    /// Short name for logs and diagnostics
    pub fn kind(&self) -> ContentSourceKind {
        match self {
            Self::Local(_) => ContentSourceKind::Local,
            Self::Remote(_) => ContentSourceKind::Remote,
        }
    }

    /// All projects
    pub async fn projects(&self) -> Result<Vec<Project>> {
        match self {
            Self::Local(catalog) => Ok(catalog.projects().to_vec()),
            Self::Remote(client) => decode(client.get_projects().await?, PROJECTS_FIELD),
        }
    }

    /// All notes
    pub async fn notes(&self) -> Result<Vec<Note>> {
        match self {
            Self::Local(catalog) => Ok(catalog.notes().to_vec()),
            Self::Remote(client) => decode(client.get_notes().await?, NOTES_FIELD),
        }
    }
}

fn decode<T: DeserializeOwned>(payload: Value, field: &'static str) -> Result<Vec<T>> {
    serde_json::from_value(payload).map_err(|source| ClientError::Decode { field, source })
}
