//! Build pipeline error type.

use std::path::PathBuf;

/// Error raised by the build pipeline.
///
/// Per-document problems (an unreadable file, a missing source root among
/// several) are demoted to warnings and do not surface here; these
/// variants are the failures that make the artifacts unusable as a set.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Two distinct source files resolved to the same route id.
    ///
    /// Left unchecked this would silently let the last writer win, so the
    /// pipeline fails before any output is written.
    #[error("Route id collision on \"{id}\": {} and {}", first.display(), second.display())]
    RouteIdCollision {
        /// The contested route id.
        id: String,
        /// File that claimed the id first, in walk order.
        first: PathBuf,
        /// File that collided with it.
        second: PathBuf,
    },

    /// None of the configured source roots could be walked.
    #[error("No readable source directory among {0:?}")]
    MissingSources(Vec<PathBuf>),

    /// Writing an artifact to the output directory failed.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Artifact path that could not be written.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing `routes.json` or `content.json` failed.
    #[error("Failed to serialize artifact: {0}")]
    Json(#[from] serde_json::Error),

    /// A render task panicked or was cancelled.
    #[error("Render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl BuildError {
    /// Wrap an I/O error with the artifact path it occurred on.
    #[must_use]
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BuildError>();
    }

    #[test]
    fn test_collision_display_names_both_files() {
        let err = BuildError::RouteIdCollision {
            id: "my-page".to_owned(),
            first: PathBuf::from("/docs/My Page.md"),
            second: PathBuf::from("/docs/my-page.md"),
        };

        assert_eq!(
            err.to_string(),
            "Route id collision on \"my-page\": /docs/My Page.md and /docs/my-page.md"
        );
    }
}
