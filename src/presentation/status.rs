/// Project status labels
///
/// Maps any status string to the badge color and text the site renders.

use serde::Serialize;

/// Badge presentation for a project status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusLabel {
    /// Tailwind background class
    pub color: &'static str,
    /// Badge text
    pub text: &'static str,
}

const PRODUCTION: StatusLabel = StatusLabel { color: "bg-lime-600", text: "production" };
const DEVELOPMENT: StatusLabel = StatusLabel { color: "bg-orange-500", text: "development" };
const ARCHIVED: StatusLabel = StatusLabel { color: "bg-gray-400", text: "archived" };

/// Look up the label for `status`, ignoring case
///
/// Anything unrecognized renders as archived.
pub fn status_config(status: &str) -> StatusLabel {
    match status.to_lowercase().as_str() {
        "production" => PRODUCTION,
        "development" => DEVELOPMENT,
        _ => ARCHIVED,
    }
}
