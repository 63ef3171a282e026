/// reqwest-backed GraphQL client
///
/// Posts a fixed query document and hands back the requested `data.<field>`
/// payload untouched. Shape validation is left to the caller.

use crate::graphql::{
    error::{ClientError, Result},
    queries::{GET_NOTES_QUERY, GET_PROJECTS_QUERY, NOTES_FIELD, PROJECTS_FIELD},
};
use serde_json::{json, Value};

/// Client for a single GraphQL endpoint
///
/// Cloning is cheap: the underlying reqwest client shares its connection pool.
#[derive(Debug, Clone)]
pub struct GraphQLClient {
    /// Full endpoint URL (e.g. "https://api.andr3w.sh/query")
    endpoint: String,
    /// Shared HTTP client
    http: reqwest::Client,
}

impl GraphQLClient {
    /// Create a client for the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch `data.projects` verbatim
    pub async fn get_projects(&self) -> Result<Value> {
        self.query_field(GET_PROJECTS_QUERY, PROJECTS_FIELD).await
    }

    /// Fetch `data.notes` verbatim
    pub async fn get_notes(&self) -> Result<Value> {
        self.query_field(GET_NOTES_QUERY, NOTES_FIELD).await
    }

    /// Post `document` and return `data.<field>` from the response
    ///
    /// One unconditional round trip. Any transport failure or non-2xx status
    /// surfaces as `ClientError::Network`.
    pub async fn query_field(&self, document: &str, field: &'static str) -> Result<Value> {
        tracing::debug!("🌍 GraphQL request: POST {} ({})", self.endpoint, field);

        let response = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&json!({ "query": document }))
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        tracing::debug!("📡 GraphQL response: {}", body);

        extract_field(body, field)
    }
}

/// Pull `data.<field>` out of a decoded GraphQL response
///
/// `null` counts as absent. GraphQL `errors` are logged but do not change the outcome.
pub fn extract_field(mut body: Value, field: &'static str) -> Result<Value> {
    if let Some(errors) = body.get("errors").filter(|e| !e.is_null()) {
        tracing::warn!("⚠️ GraphQL response for '{}' carried errors: {}", field, errors);
    }

    match body
        .get_mut("data")
        .and_then(|data| data.get_mut(field))
        .map(Value::take)
    {
        Some(Value::Null) | None => Err(ClientError::missing_data(field)),
        Some(payload) => Ok(payload),
    }
}
