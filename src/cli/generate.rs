//! Generate command: create a new app from a free-text description.

use crate::cli::common::{self, CliError, CliResult};
use clap::Args;
use std::path::PathBuf;

/// Generate a new app from a natural-language description
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Natural-language description of the app to build
    #[arg(value_name = "DESCRIPTION")]
    pub input: String,

    /// Directory to write the generated source files into
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Path to save the app snapshot (required for later `modify` calls)
    #[arg(short, long, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Output the full app snapshot as JSON to stdout
    #[arg(long)]
    pub json: bool,

    /// Skip the completion service and classify locally
    #[arg(long)]
    pub offline: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let generator = common::build_generator(self.offline)?;
        let app = generator
            .generate_new(&self.input)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        if let Some(out_dir) = &self.out_dir {
            common::write_files(out_dir, &app.files)?;
        }
        if let Some(state) = &self.state {
            common::save_snapshot(state, &app)?;
        }

        if self.json {
            let json = serde_json::to_string_pretty(&app)
                .map_err(|e| CliError::io(format!("Failed to serialize app: {e}")))?;
            println!("{json}");
        } else {
            println!("✓ Generated {} ({})", app.app_name, app.template_name);
            println!("  Features: {}", app.features.join(", "));
            println!("  Files: {}", app.files.len());
            if let Some(out_dir) = &self.out_dir {
                println!("  Output: {}", out_dir.display());
            }
            if let Some(state) = &self.state {
                println!("  Snapshot: {}", state.display());
            }
        }

        Ok(())
    }
}
