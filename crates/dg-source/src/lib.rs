//! Source tree walking for the DG documentation generator.
//!
//! Provides [`walk`] for enumerating markdown files under a source root,
//! preserving the directory structure as a `/`-joined namespace prefix,
//! and [`SourceError`] for unified error handling.

mod error;
mod walker;

pub use error::{SourceError, SourceErrorKind};
pub use walker::{MARKDOWN_EXTENSION, SourceDocument, SourceFile, walk};
