/// Error types for the GraphQL data client
///
/// Two failure classes exist on the wire: the endpoint answered but the
/// expected field is absent, or the round trip itself failed. Transport
/// errors, non-2xx statuses and undecodable bodies are not told apart.

use thiserror::Error;

/// Errors produced while fetching or decoding portfolio content
#[derive(Error, Debug)]
pub enum ClientError {
    /// The response had no `data` object or no `data.<field>` value
    #[error("{field} data is missing")]
    MissingData {
        /// Name of the expected field (e.g. "notes")
        field: &'static str,
    },

    /// Request could not be sent, returned a non-success status, or the body was not JSON
    #[error("graphql request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The payload was present but did not match the typed content model
    #[error("failed to decode {field}: {source}")]
    Decode {
        /// Name of the field being decoded
        field: &'static str,
        /// The underlying error
        #[source]
        source: serde_json::Error,
    },
}

/// A specialized Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Create a missing-data error for the given response field
    #[must_use]
    pub fn missing_data(field: &'static str) -> Self {
        Self::MissingData { field }
    }

    /// Check if this error means the expected field was absent
    #[must_use]
    pub fn is_missing_data(&self) -> bool {
        matches!(self, Self::MissingData { .. })
    }
}
