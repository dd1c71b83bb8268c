//! Error types for the game core.

use std::path::PathBuf;

/// A specialized `Result` type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by the scene catalog and game session.
///
/// Events delivered in a phase that does not accept them are not errors; the
/// session ignores them.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Scene index outside `[0, scene_count)`.
    #[error("scene index {index} out of range (catalog has {count} scenes)")]
    InvalidIndex { index: usize, count: usize },

    /// A catalog must contain at least one scene.
    #[error("scene catalog is empty")]
    EmptyCatalog,

    /// Two scenes share the same identifier.
    #[error("duplicate scene id '{0}'")]
    DuplicateSceneId(String),

    /// The catalog file could not be read.
    #[error("failed to read scene catalog '{path}': {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog JSON is malformed or names an unknown stop value.
    #[error("invalid scene catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),
}
