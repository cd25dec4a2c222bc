//! CLI command implementations.

mod build;
mod routes;

use std::path::{Path, PathBuf};

use dg_build::BuildOptions;
use dg_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use routes::RoutesArgs;

/// Load configuration and assemble pipeline options from it.
///
/// CLI path overrides win over the config file.
pub(crate) fn load_build_options(
    config_path: Option<&Path>,
    source_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> Result<BuildOptions, CliError> {
    let settings = CliSettings {
        source_dir,
        output_dir,
    };
    let config = Config::load(config_path, Some(&settings))?;

    Ok(BuildOptions {
        source_dirs: config.build_resolved.source_dirs.clone(),
        output_dir: config.build_resolved.output_dir.clone(),
        overrides: config.overrides().clone(),
        categories: config.categories().clone(),
        standardize_prefixes: config.build_resolved.standardize_prefixes.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_load_build_options_from_config_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("dg.toml");
        fs::write(
            &config_path,
            r#"
[build]
source_dirs = ["docs"]
output_dir = "public"
standardize_prefixes = ["legacy"]

[[nav.categories]]
name = "Core"
routes = ["core/p2p"]
"#,
        )
        .unwrap();

        let options = load_build_options(Some(&config_path), None, None).unwrap();

        assert_eq!(options.source_dirs, vec![temp_dir.path().join("docs")]);
        assert_eq!(options.output_dir, temp_dir.path().join("public"));
        assert_eq!(options.standardize_prefixes, vec!["legacy"]);
        assert_eq!(options.overrides.get("index.md"), Some("home"));
        assert_eq!(
            options.categories.iter().next().map(|c| c.name.as_str()),
            Some("Core")
        );
    }

    #[test]
    fn test_cli_overrides_win() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("dg.toml");
        fs::write(&config_path, "").unwrap();

        let options = load_build_options(
            Some(&config_path),
            Some(PathBuf::from("/cli/docs")),
            Some(PathBuf::from("/cli/out")),
        )
        .unwrap();

        assert_eq!(options.source_dirs, vec![PathBuf::from("/cli/docs")]);
        assert_eq!(options.output_dir, PathBuf::from("/cli/out"));
    }
}
