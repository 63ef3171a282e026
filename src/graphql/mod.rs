/// GraphQL data client
///
/// Fetches portfolio content from a single remote GraphQL endpoint.
/// Each call is one POST round trip carrying a compile-time query document:
/// - No retries, timeouts, or caching
/// - The `data.<field>` payload is returned verbatim

// Fixed query documents
pub mod queries;

// Client error taxonomy
pub mod error;

// reqwest-backed client
pub mod client;

pub use client::GraphQLClient;
pub use error::{ClientError, Result};
