//! Generation orchestrator: turns a free-text request into a complete app,
//! or routes it through the modification engine when an existing app is
//! supplied.

use crate::completion::CompletionClient;
use crate::models::{GeneratedApp, ModificationResult};
use crate::parser;
use crate::{modify, templates};
use anyhow::Result;
use chrono::Utc;

/// What one orchestrated request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// A freshly generated app.
    New(GeneratedApp),
    /// A modification of the supplied existing app.
    Modified(ModificationResult),
}

/// Orchestrates classification, template generation and modification.
///
/// Holds the optional completion client used by the intent classifier; with
/// no client every request takes the local keyword path. The orchestrator
/// is stateless between calls and the caller owns every returned snapshot.
pub struct Generator {
    client: Option<Box<dyn CompletionClient>>,
}

impl Generator {
    /// Creates an orchestrator with an optional completion client.
    #[must_use]
    pub fn new(client: Option<Box<dyn CompletionClient>>) -> Self {
        Self { client }
    }

    /// Generates a new app from a free-text request.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is empty or the generated snapshot
    /// fails structural validation.
    pub fn generate_new(&self, user_input: &str) -> Result<GeneratedApp> {
        if user_input.trim().is_empty() {
            anyhow::bail!("User input is required");
        }

        let classification = parser::classify(user_input, self.client.as_deref());
        let template = templates::generate(classification.category, &classification.customizations);

        let app = GeneratedApp {
            app_name: classification.customizations.app_identifier(),
            template: classification.category,
            template_name: template.name,
            features: template.features,
            files: template.files,
            customizations: classification.customizations,
            generated_at: Utc::now(),
        };
        app.validate()?;
        Ok(app)
    }

    /// Processes one request: modification when an existing app is given,
    /// full generation otherwise.
    ///
    /// A failing modification never fails the request: the error is logged
    /// and the input is treated as a brand-new generation request, trading
    /// accumulated state for availability.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is empty or generation itself fails.
    pub fn process(
        &self,
        user_input: &str,
        existing: Option<&GeneratedApp>,
    ) -> Result<GenerationOutcome> {
        if let Some(existing) = existing {
            match modify::modify(user_input, existing) {
                Ok(result) => return Ok(GenerationOutcome::Modified(result)),
                Err(error) => {
                    tracing::warn!(%error, "modification failed, regenerating from scratch");
                }
            }
        }
        Ok(GenerationOutcome::New(self.generate_new(user_input)?))
    }
}
