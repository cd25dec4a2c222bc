//! Output directory artifact writer.

use std::path::Path;

use dg_manifest::{ContentIndex, NavigationManifest};

use crate::error::BuildError;

/// Write one pre-rendered fragment to `{output_dir}/{route_id}.html`.
///
/// Route ids may contain `/` separators; intermediate directories are
/// created to mirror them. The slug alphabet keeps ids free of `..` and
/// other path escapes.
pub(crate) async fn write_fragment(
    output_dir: &Path,
    route_id: &str,
    html: &str,
) -> Result<(), BuildError> {
    let path = output_dir.join(format!("{route_id}.html"));
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| BuildError::write(parent, e))?;
    }
    tokio::fs::write(&path, html)
        .await
        .map_err(|e| BuildError::write(&path, e))
}

/// Write `routes.json` and `content.json`.
///
/// Serialization is deterministic: the manifest is an ordered array and
/// the index keys come from a `BTreeMap`, so rebuilds of unchanged
/// sources are byte-identical.
pub(crate) async fn write_manifest(
    output_dir: &Path,
    manifest: &NavigationManifest,
    index: &ContentIndex,
) -> Result<(), BuildError> {
    let routes_path = output_dir.join("routes.json");
    let routes_json = serde_json::to_vec_pretty(manifest)?;
    tokio::fs::write(&routes_path, routes_json)
        .await
        .map_err(|e| BuildError::write(&routes_path, e))?;

    let content_path = output_dir.join("content.json");
    let content_json = serde_json::to_vec_pretty(index)?;
    tokio::fs::write(&content_path, content_json)
        .await
        .map_err(|e| BuildError::write(&content_path, e))
}
