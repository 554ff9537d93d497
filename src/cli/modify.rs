//! Modify command: apply a free-text change request to a saved app.

use crate::cli::common::{self, CliError, CliResult};
use crate::generator::GenerationOutcome;
use clap::Args;
use std::path::PathBuf;

/// Modify a previously generated app
#[derive(Debug, Clone, Args)]
pub struct ModifyArgs {
    /// Natural-language description of the change
    #[arg(value_name = "REQUEST")]
    pub request: String,

    /// Path to the app snapshot produced by `generate --state`
    #[arg(short, long, value_name = "FILE")]
    pub state: PathBuf,

    /// Directory to write the updated source files into
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Output the updated app snapshot as JSON to stdout
    #[arg(long)]
    pub json: bool,

    /// Skip the completion service and classify locally
    #[arg(long)]
    pub offline: bool,
}

impl ModifyArgs {
    /// Execute the modify command
    pub fn execute(&self) -> CliResult<()> {
        let mut app = common::load_snapshot(&self.state)?;
        let generator = common::build_generator(self.offline)?;

        let outcome = generator
            .process(&self.request, Some(&app))
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let summary = match outcome {
            GenerationOutcome::Modified(result) => {
                app.files = result.files;
                app.customizations = result.customizations;
                result.summary
            }
            GenerationOutcome::New(regenerated) => {
                let summary = format!(
                    "Regenerated {} ({})",
                    regenerated.app_name, regenerated.template_name
                );
                app = regenerated;
                summary
            }
        };

        common::save_snapshot(&self.state, &app)?;
        if let Some(out_dir) = &self.out_dir {
            common::write_files(out_dir, &app.files)?;
        }

        if self.json {
            let json = serde_json::to_string_pretty(&app)
                .map_err(|e| CliError::io(format!("Failed to serialize app: {e}")))?;
            println!("{json}");
        } else {
            println!("✓ {summary}");
            println!("  Snapshot: {}", self.state.display());
            if let Some(out_dir) = &self.out_dir {
                println!("  Output: {}", out_dir.display());
            }
        }

        Ok(())
    }
}
