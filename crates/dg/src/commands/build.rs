//! Build command.

use std::path::PathBuf;

use clap::Args;

use crate::commands::load_build_options;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to the configuration file (defaults to discovering dg.toml).
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Source directory (overrides config).
    #[arg(short, long, value_name = "DIR")]
    pub(crate) source_dir: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long, value_name = "DIR")]
    pub(crate) output_dir: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    /// Run the build pipeline and report the result.
    pub(crate) async fn execute(self, output: &Output) -> Result<(), CliError> {
        let options = load_build_options(self.config.as_deref(), self.source_dir, self.output_dir)?;
        let output_dir = options.output_dir.clone();

        let report = dg_build::build(options).await?;

        for warning in &report.warnings {
            output.warning(warning);
        }
        output.success(&format!(
            "Built {} route(s) into {}",
            report.routes.len(),
            output_dir.display()
        ));
        Ok(())
    }
}
