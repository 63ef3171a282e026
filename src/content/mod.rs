/// Portfolio content layer
///
/// Typed project and note records, the compiled-in catalog, and the source
/// switch between the catalog and the remote GraphQL client.

pub mod types;

// JSON literals compiled into the binary
pub mod catalog;

// Local vs remote selection
pub mod source;

pub use catalog::Catalog;
pub use source::ContentSource;
pub use types::{Note, Project, ProjectStatus};
