//! Source error type with semantic kinds.

use std::path::{Path, PathBuf};

/// Semantic error categories for source tree access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceErrorKind {
    /// A configured source root does not exist.
    ///
    /// Non-fatal: the caller is expected to skip the subtree and continue
    /// with the remaining roots.
    DirectoryNotFound,
    /// An individual file could not be read.
    Unreadable,
    /// Other/unknown error category.
    Other,
}

/// Error raised while walking or reading a source tree.
#[derive(Debug)]
pub struct SourceError {
    kind: SourceErrorKind,
    path: Option<PathBuf>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SourceError {
    /// Create a new source error.
    #[must_use]
    pub fn new(kind: SourceErrorKind) -> Self {
        Self {
            kind,
            path: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a missing-root error with path context.
    #[must_use]
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(SourceErrorKind::DirectoryNotFound).with_path(path)
    }

    /// Create a source error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => SourceErrorKind::DirectoryNotFound,
            std::io::ErrorKind::PermissionDenied | std::io::ErrorKind::InvalidData => {
                SourceErrorKind::Unreadable
            }
            _ => SourceErrorKind::Other,
        };
        Self::new(kind).with_path(path).with_source(err)
    }

    /// Create an unreadable-file error from an I/O error.
    #[must_use]
    pub fn unreadable(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::new(SourceErrorKind::Unreadable)
            .with_path(path)
            .with_source(err)
    }

    /// Semantic error category.
    #[must_use]
    pub fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    /// Path context, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind_str = match self.kind {
            SourceErrorKind::DirectoryNotFound => "Directory not found",
            SourceErrorKind::Unreadable => "Unreadable source file",
            SourceErrorKind::Other => "Source error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}
