/// Compile-time GraphQL documents
///
/// The selection sets mirror the `Project` and `Note` records in `content::types`.

/// Response field holding the project list
pub const PROJECTS_FIELD: &str = "projects";

/// Response field holding the note list
pub const NOTES_FIELD: &str = "notes";

/// Query for every project
pub const GET_PROJECTS_QUERY: &str = r#"
  query {
    projects {
      id
      title
      description
      status
      link
      url
      giturl
      tags
    }
  }
"#;

/// Query for every note
pub const GET_NOTES_QUERY: &str = r#"
  query {
    notes {
      id
      title
      description
      url
      date
    }
  }
"#;
