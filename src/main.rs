/// Folio: portfolio content service
///
/// Main entry point. Reads configuration from the environment and starts the
/// HTTP server.

use folio::{config::Config, server::start_server};

/// Application entry point
///
/// The server provides:
/// - Project and note listings at /api/projects and /api/notes
/// - Theme switching at /api/theme and /api/themes
/// - Status badges at /api/status/{status}
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:4321 and the local catalog)
    let config = Config::default();

    start_server(config).await?;

    Ok(())
}
