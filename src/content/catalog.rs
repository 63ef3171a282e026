/// In-repo content catalog
///
/// Projects and notes kept as JSON literals under `data/` and compiled into
/// the binary. Decoding validates every record against the typed model, so
/// a bad status or duplicate id fails at startup instead of at render time.

use crate::content::types::{Note, Project};
use anyhow::Result;
use std::collections::HashSet;

const PROJECTS_JSON: &str = include_str!("../../data/projects.json");
const NOTES_JSON: &str = include_str!("../../data/notes.json");

/// Decoded, validated catalog of local content
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
    notes: Vec<Note>,
}

impl Catalog {
    /// Load the catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(PROJECTS_JSON, NOTES_JSON)
    }

    /// Decode a catalog from JSON arrays of projects and notes
    ///
    /// Notes are ordered newest-first; undated notes sink to the end in their
    /// original order.
    pub fn from_json(projects_json: &str, notes_json: &str) -> Result<Self> {
        let projects: Vec<Project> = serde_json::from_str(projects_json)
            .map_err(|e| anyhow::anyhow!("Failed to decode project catalog: {}", e))?;
        let mut notes: Vec<Note> = serde_json::from_str(notes_json)
            .map_err(|e| anyhow::anyhow!("Failed to decode note catalog: {}", e))?;

        ensure_unique("project", projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique("note", notes.iter().map(|n| n.id.as_str()))?;

        // Option orders None first, so reversing the comparison puts undated notes last
        notes.sort_by(|a, b| b.published().cmp(&a.published()));

        tracing::debug!("📚 Catalog decoded: {} projects, {} notes", projects.len(), notes.len());

        Ok(Self { projects, notes })
    }

    /// All projects in catalog order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// All notes, newest first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.is_empty() {
            return Err(anyhow::anyhow!("Catalog {} has an empty id", kind));
        }
        if !seen.insert(id) {
            return Err(anyhow::anyhow!("Duplicate {} id in catalog: {}", kind, id));
        }
    }
    Ok(())
}
