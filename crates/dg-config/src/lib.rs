//! Configuration management for DG.
//!
//! Parses `dg.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `build.source_dirs`
//! - `build.output_dir`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use dg_manifest::CategoryTable;
use dg_routes::RouteOverrides;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the source directories with a single root.
    pub source_dir: Option<PathBuf>,
    /// Override the output directory.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "dg.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build configuration (paths are relative strings from TOML).
    build: BuildConfigRaw,
    /// Route override configuration.
    routes: RoutesConfig,
    /// Navigation configuration.
    nav: NavConfig,

    /// Resolved build configuration (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw build configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    source_dirs: Option<Vec<String>>,
    output_dir: Option<String>,
    standardize_prefixes: Option<Vec<String>>,
}

/// Resolved build configuration with absolute paths.
#[derive(Debug, Default)]
pub struct BuildConfig {
    /// Source roots for markdown files, in walk order.
    pub source_dirs: Vec<PathBuf>,
    /// Directory the artifacts are written into.
    pub output_dir: PathBuf,
    /// Directory prefixes whose documents get the standardization pre-pass.
    pub standardize_prefixes: Vec<String>,
}

/// Route override configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RoutesConfig {
    /// Filename → route id override table.
    #[serde(default = "default_overrides")]
    overrides: RouteOverrides,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            overrides: default_overrides(),
        }
    }
}

/// The out-of-the-box override table: the root `index.md` becomes the
/// home route. An explicit `[routes.overrides]` section replaces it.
fn default_overrides() -> RouteOverrides {
    RouteOverrides::from_iter([("index.md", "home")])
}

/// Navigation configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct NavConfig {
    /// Ordered category table, `[[nav.categories]]` in TOML.
    categories: CategoryTable,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`build.output_dir`").
        field: String,
        /// Error message (e.g., "${`DG_OUTPUT`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `dg.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Filename → route id override table.
    #[must_use]
    pub fn overrides(&self) -> &RouteOverrides {
        &self.routes.overrides
    }

    /// Ordered navigation category table.
    #[must_use]
    pub fn categories(&self) -> &CategoryTable {
        &self.nav.categories
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.build_resolved.source_dirs = vec![source_dir.clone()];
        }
        if let Some(output_dir) = &settings.output_dir {
            self.build_resolved.output_dir.clone_from(output_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            build: BuildConfigRaw::default(),
            routes: RoutesConfig::default(),
            nav: NavConfig::default(),
            build_resolved: BuildConfig {
                source_dirs: vec![base.join("docs")],
                output_dir: base.join("build"),
                standardize_prefixes: Vec::new(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.build_resolved.source_dirs.is_empty() {
            return Err(ConfigError::Validation(
                "build.source_dirs cannot be empty".to_owned(),
            ));
        }

        for category in self.nav.categories.iter() {
            if category.name.is_empty() {
                return Err(ConfigError::Validation(
                    "nav.categories entries require a non-empty name".to_owned(),
                ));
            }
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut source_dirs) = self.build.source_dirs {
            for dir in source_dirs.iter_mut() {
                *dir = expand::expand_env(dir, "build.source_dirs")?;
            }
        }
        if let Some(ref output_dir) = self.build.output_dir {
            self.build.output_dir = Some(expand::expand_env(output_dir, "build.output_dir")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let source_dirs = match self.build.source_dirs.as_deref() {
            Some(dirs) => dirs.iter().map(|d| config_dir.join(d)).collect(),
            None => vec![config_dir.join("docs")],
        };

        self.build_resolved = BuildConfig {
            source_dirs,
            output_dir: config_dir.join(self.build.output_dir.as_deref().unwrap_or("build")),
            standardize_prefixes: self.build.standardize_prefixes.clone().unwrap_or_default(),
        };
    }
}
