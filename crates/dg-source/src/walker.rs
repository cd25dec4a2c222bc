//! Recursive markdown source tree walker.
//!
//! Enumerates `*.md` files under a root directory, accumulating a
//! `/`-joined directory prefix for each nested level. Prefix segments are
//! slugified with the same rules as filenames, so the prefix is directly
//! usable as the namespace part of a route id.

use std::fs;
use std::path::{Path, PathBuf};

use dg_routes::slugify;

use crate::error::SourceError;

/// File extension recognized as a markdown source.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Descriptor for one markdown file found by the walker.
///
/// Cheap to move between tasks; content is read separately via
/// [`SourceFile::read`] so walking never blocks on file I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Absolute (or root-relative) path to the file on disk.
    pub abs_path: PathBuf,
    /// `/`-joined directory prefix relative to the walked root, with each
    /// segment slugified; empty for files directly under the root.
    pub dir_prefix: String,
    /// File name including the markdown extension.
    pub file_name: String,
}

impl SourceFile {
    /// Read the file content, producing a full [`SourceDocument`].
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] with kind `Unreadable` if the file cannot
    /// be read as UTF-8 text.
    pub async fn read(self) -> Result<SourceDocument, SourceError> {
        match tokio::fs::read_to_string(&self.abs_path).await {
            Ok(raw_text) => Ok(SourceDocument {
                file: self,
                raw_text,
            }),
            Err(e) => {
                let path = self.abs_path.clone();
                Err(SourceError::unreadable(e, path))
            }
        }
    }
}

/// A source file together with its raw markdown text.
///
/// Discarded after rendering; never persisted between builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// The walker descriptor this document was read from.
    pub file: SourceFile,
    /// Raw markdown text.
    pub raw_text: String,
}

/// Walk a source root and collect markdown file descriptors.
///
/// Recurses into subdirectories, skipping hidden (`.`) and
/// underscore-prefixed entries. Entries are returned in a deterministic
/// order (directories first, then alphabetical by lowercased name), which
/// rebuilds rely on for byte-identical output.
///
/// # Errors
///
/// Returns [`SourceError`] with kind `DirectoryNotFound` if the root does
/// not exist. Callers treat this as non-fatal and continue with other
/// roots.
pub fn walk(root: &Path) -> Result<Vec<SourceFile>, SourceError> {
    if !root.is_dir() {
        return Err(SourceError::directory_not_found(root));
    }

    Ok(walk_directory(root, ""))
}

/// Scan one directory level, recursing with an accumulated prefix.
fn walk_directory(dir_path: &Path, prefix: &str) -> Vec<SourceFile> {
    let Ok(entries) = fs::read_dir(dir_path) else {
        tracing::warn!(path = %dir_path.display(), "Failed to read directory, skipping");
        return Vec::new();
    };

    // Collect entries with cached file_type to avoid repeated stat calls in sort.
    let mut entries: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|e| {
            let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
            let name_lower = e.file_name().to_string_lossy().to_lowercase();
            (e, is_dir, name_lower)
        })
        .collect();

    // Sort: directories first, then alphabetical by name
    entries.sort_by(|(_, a_is_dir, a_name), (_, b_is_dir, b_name)| {
        b_is_dir.cmp(a_is_dir).then_with(|| a_name.cmp(b_name))
    });

    let mut files = Vec::new();

    for (entry, is_dir, name_lower) in entries {
        if name_lower.starts_with('.') || name_lower.starts_with('_') {
            continue;
        }

        let path = entry.path();

        if is_dir {
            // Slugified so the accumulated prefix is already route-id shaped.
            let segment = slugify(&name_lower);
            let child_prefix = if prefix.is_empty() {
                segment
            } else {
                format!("{prefix}/{segment}")
            };
            files.extend(walk_directory(&path, &child_prefix));
        } else if path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case(MARKDOWN_EXTENSION))
        {
            files.push(SourceFile {
                abs_path: path,
                dir_prefix: prefix.to_owned(),
                file_name: entry.file_name().to_string_lossy().into_owned(),
            });
        }
    }

    files
}
