/// Portfolio content type definitions
///
/// Projects and notes are plain immutable records. The JSON field names match
/// both the GraphQL selection sets and the in-repo catalog files.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier (e.g., "py-runner")
    pub id: String,
    /// Display title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Lifecycle status, validated on decode
    pub status: ProjectStatus,
    /// Whether the project has a live link
    #[serde(default)]
    pub link: bool,
    /// Live URL when `link` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Source repository or gist
    pub giturl: String,
    /// Ordered technology tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Preview image shown on project cards
    #[serde(
        rename = "imageUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
}

/// Project lifecycle status
///
/// Serialized lowercase. Decoding is case-insensitive and accepts the legacy
/// "offline" spelling for `Archived`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Production,
    Development,
    Archived,
}

impl ProjectStatus {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Archived => "archived",
        }
    }

    /// Presentation label for this status
    pub fn label(&self) -> crate::presentation::StatusLabel {
        crate::presentation::status_config(self.as_str())
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for status strings outside the known set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown project status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for ProjectStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "development" => Ok(Self::Development),
            "archived" | "offline" => Ok(Self::Archived),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A published note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique note identifier (e.g., "tls-chat-server")
    pub id: String,
    /// Display title
    pub title: String,
    /// Short summary
    pub description: String,
    /// Where the note body lives
    pub url: String,
    /// Publication date as "YYYY-MM" or "YYYY-MM-DD"
    pub date: String,
    /// Companion repository, if any
    #[serde(
        rename = "externalUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub external_url: Option<String>,
}

impl Note {
    /// Parsed publication date
    ///
    /// Month-only dates resolve to the first of the month. Returns None for
    /// anything chrono cannot read.
    pub fn published(&self) -> Option<NaiveDate> {
        let date = self.date.trim();
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", date), "%Y-%m-%d"))
            .ok()
    }
}
