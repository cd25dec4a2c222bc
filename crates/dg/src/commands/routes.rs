//! Routes command.

use std::path::PathBuf;

use clap::Args;

use crate::commands::load_build_options;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Path to the configuration file (defaults to discovering dg.toml).
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Source directory (overrides config).
    #[arg(short, long, value_name = "DIR")]
    pub(crate) source_dir: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl RoutesArgs {
    /// Resolve the route plan and print it without building.
    ///
    /// Surfaces id collisions with the same failure the build would
    /// produce, which makes this the cheap pre-flight check.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let options = load_build_options(self.config.as_deref(), self.source_dir, None)?;

        let planned = dg_build::plan_routes(&options)?;

        output.heading(&format!("{} route(s)", planned.len()));
        for route in &planned {
            output.route(&route.id, &route.title);
        }
        Ok(())
    }
}
