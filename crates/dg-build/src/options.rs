//! Build options.

use std::path::PathBuf;

use dg_manifest::CategoryTable;
use dg_routes::RouteOverrides;

/// Everything the build pipeline needs, resolved ahead of time.
///
/// Supplied by the config layer; the pipeline itself never reads
/// configuration files or environment variables.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Source roots to walk, in order. A missing root is skipped with a
    /// warning; the build only fails when none of them can be walked.
    pub source_dirs: Vec<PathBuf>,
    /// Directory the artifacts are written into.
    pub output_dir: PathBuf,
    /// Filename → route id override table.
    pub overrides: RouteOverrides,
    /// Hand-authored navigation category table.
    pub categories: CategoryTable,
    /// Directory prefixes whose documents run through the legacy
    /// standardization pre-pass.
    pub standardize_prefixes: Vec<String>,
}

impl BuildOptions {
    /// True if the given directory prefix falls under a configured
    /// standardization prefix.
    #[must_use]
    pub fn is_legacy_prefix(&self, dir_prefix: &str) -> bool {
        self.standardize_prefixes.iter().any(|p| {
            let p = p.as_str();
            dir_prefix == p
                || (dir_prefix.len() > p.len() && dir_prefix.starts_with(&format!("{p}/")))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_with_prefixes(prefixes: &[&str]) -> BuildOptions {
        BuildOptions {
            standardize_prefixes: prefixes.iter().map(|p| (*p).to_owned()).collect(),
            ..BuildOptions::default()
        }
    }

    #[test]
    fn test_legacy_prefix_matches_exact_and_nested() {
        let options = options_with_prefixes(&["legacy"]);

        assert!(options.is_legacy_prefix("legacy"));
        assert!(options.is_legacy_prefix("legacy/net"));
        assert!(!options.is_legacy_prefix("legacy-docs"));
        assert!(!options.is_legacy_prefix("core"));
    }

    #[test]
    fn test_no_prefixes_matches_nothing() {
        let options = options_with_prefixes(&[]);

        assert!(!options.is_legacy_prefix(""));
        assert!(!options.is_legacy_prefix("core"));
    }
}
