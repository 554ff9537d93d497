//! Intent classification: mapping a free-text request to a template
//! category.
//!
//! The preferred path delegates to a configured text-completion collaborator
//! and parses its JSON reply; the always-available local path scores the
//! request against each category's fixed keyword stems. Classification is a
//! total function: absence of signal yields the default category, never an
//! error.

use crate::completion::CompletionClient;
use crate::models::{CustomizationRecord, TemplateCategory};
use crate::parser::extract_customizations;
use serde::Deserialize;
use tracing::debug;

/// System instruction sent to the completion collaborator.
const CLASSIFY_INSTRUCTION: &str = r##"You are an AI assistant that classifies app ideas and extracts customization details.

Choose the closest template from this list even if the user uses synonyms or vague language:
 - restaurant
 - business
 - ecommerce
 - fitness
 - directory

Return ONLY a JSON object in this format:
{
  "template": "template_name",
  "customizations": {
    "businessName": "name or default",
    "primaryColor": "#hexcode",
    "secondaryColor": "#hexcode",
    "backgroundColor": "#hexcode",
    "features": ["feature1", "feature2"]
  }
}

Use sensible defaults if details are missing."##;

/// The result of classifying a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The chosen template category (always one of the five fixed values).
    pub category: TemplateCategory,
    /// Identity/theme record to render the template with.
    pub customizations: CustomizationRecord,
}

/// Structured view of the collaborator's JSON reply.
///
/// Missing or invalid required fields parse to `None` at the call site, so
/// fallback is a value, not an exception.
#[derive(Debug, Deserialize)]
struct AiClassification {
    template: String,
    #[serde(default)]
    customizations: Option<AiCustomizations>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AiCustomizations {
    #[serde(default)]
    business_name: Option<String>,
    #[serde(default)]
    primary_color: Option<String>,
    #[serde(default)]
    secondary_color: Option<String>,
    #[serde(default)]
    background_color: Option<String>,
}

/// Classifies a request, preferring the completion collaborator when one is
/// configured.
///
/// Any collaborator failure (transport error, non-JSON reply, missing
/// `template` field, unknown category name) falls through to the local
/// keyword path. The local path always takes its customizations from the
/// extractor, never from the collaborator's suggestion.
#[must_use]
pub fn classify(text: &str, client: Option<&dyn CompletionClient>) -> Classification {
    if let Some(client) = client {
        match client.complete(CLASSIFY_INSTRUCTION, text) {
            Ok(reply) => {
                if let Some(classification) = parse_ai_reply(&reply) {
                    return classification;
                }
                debug!("completion reply was not usable, falling back to keyword scoring");
            }
            Err(e) => {
                debug!(error = %e, "completion request failed, falling back to keyword scoring");
            }
        }
    }

    classify_local(text)
}

/// Local keyword-scoring classification.
///
/// Each category's score is the count of its keyword stems present as
/// substrings of the lowercased input. The strictly highest score wins;
/// ties and zero-score inputs resolve to the default category.
#[must_use]
pub fn classify_local(text: &str) -> Classification {
    let input = text.to_lowercase();

    let mut best = TemplateCategory::DEFAULT;
    let mut best_score = 0usize;

    for category in TemplateCategory::ALL {
        let score = category
            .keywords()
            .iter()
            .filter(|stem| input.contains(*stem))
            .count();
        if score > best_score {
            best = category;
            best_score = score;
        }
    }

    Classification {
        category: best,
        customizations: extract_customizations(text),
    }
}

/// Extracts and parses the JSON object embedded in a collaborator reply.
///
/// The reply is scanned from the first `{` through the last `}`; anything
/// outside that window (prose, code fences) is ignored. Returns `None` on
/// parse failure, a missing `template` field, or a category name outside
/// the fixed set.
fn parse_ai_reply(reply: &str) -> Option<Classification> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end < start {
        return None;
    }

    let parsed: AiClassification = serde_json::from_str(&reply[start..=end]).ok()?;
    let category: TemplateCategory = parsed.template.parse().ok()?;

    let mut customizations = CustomizationRecord::default();
    if let Some(ai) = parsed.customizations {
        if let Some(name) = ai.business_name {
            customizations.business_name = name;
        }
        if let Some(color) = ai.primary_color {
            customizations.primary_color = color;
        }
        if let Some(color) = ai.secondary_color {
            customizations.secondary_color = color;
        }
        if let Some(color) = ai.background_color {
            customizations.background_color = color;
        }
    }
    // Collaborator replies are untrusted; malformed colors void the reply
    // rather than producing a partially invalid record.
    customizations.validate().ok()?;

    Some(Classification {
        category,
        customizations,
    })
}
