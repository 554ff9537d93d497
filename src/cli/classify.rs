//! Classify command: show how a request would be interpreted without
//! generating anything.

use crate::cli::common::{CliError, CliResult};
use crate::completion::{CompletionClient, OpenAiClient};
use crate::config::Config;
use crate::parser;
use clap::Args;
use serde::Serialize;

/// Classify a request without generating an app
#[derive(Debug, Clone, Args)]
pub struct ClassifyArgs {
    /// Natural-language description to classify
    #[arg(value_name = "DESCRIPTION")]
    pub input: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the completion service and classify locally
    #[arg(long)]
    pub offline: bool,
}

/// JSON-serializable classification for output
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ClassificationOutput {
    template: String,
    template_name: String,
    business_name: String,
    primary_color: String,
    secondary_color: String,
    background_color: String,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> CliResult<()> {
        if self.input.trim().is_empty() {
            return Err(CliError::validation("User input is required"));
        }

        let classification = if self.offline {
            parser::classify_local(&self.input)
        } else {
            let config = Config::load().map_err(|e| CliError::validation(format!("{e:#}")))?;
            let client = OpenAiClient::from_env(
                config.completion.settings(),
                &config.completion.api_key_env,
            )
            .map_err(|e| CliError::io(format!("Failed to create completion client: {e:#}")))?;
            match &client {
                Some(client) => parser::classify(&self.input, Some(client as &dyn CompletionClient)),
                None => parser::classify_local(&self.input),
            }
        };

        let output = ClassificationOutput {
            template: classification.category.id().to_string(),
            template_name: classification.category.display_name().to_string(),
            business_name: classification.customizations.business_name.clone(),
            primary_color: classification.customizations.primary_color.clone(),
            secondary_color: classification.customizations.secondary_color.clone(),
            background_color: classification.customizations.background_color.clone(),
        };

        if self.json {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize classification: {e}")))?;
            println!("{json}");
        } else {
            println!("Template:  {}", output.template_name);
            println!("Business:  {}", output.business_name);
            println!(
                "Colors:    primary {}, secondary {}, background {}",
                output.primary_color, output.secondary_color, output.background_color
            );
        }

        Ok(())
    }
}
