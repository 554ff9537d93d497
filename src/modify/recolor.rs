//! Recolor branch: swaps the theme colors of an existing app.

use crate::models::{GeneratedApp, ModificationResult};
use crate::parser::extract_customizations;

/// Applies a recolor request.
///
/// The replacement colors come from running the customization extractor on
/// the request text, so an unrecognized color name quietly resolves to the
/// default palette. Each of the three color fields is rewritten by literal
/// substitution of the existing hex value across every file, which also
/// reverts the derived secondary and keeps manual edits intact.
pub fn apply(request: &str, existing: &GeneratedApp) -> ModificationResult {
    let extracted = extract_customizations(request);
    let mut files = existing.files.clone();

    let pairs = [
        (
            &existing.customizations.primary_color,
            &extracted.primary_color,
        ),
        (
            &existing.customizations.secondary_color,
            &extracted.secondary_color,
        ),
        (
            &existing.customizations.background_color,
            &extracted.background_color,
        ),
    ];
    for (old, new) in pairs {
        if old.is_empty() || new.is_empty() {
            continue;
        }
        for content in files.values_mut() {
            *content = content.replace(old.as_str(), new.as_str());
        }
    }

    let mut customizations = existing.customizations.clone();
    customizations.merge_colors(&extracted);

    ModificationResult {
        files,
        customizations,
        summary: format!(
            "Changed colors to: Primary {}, Secondary {}",
            extracted.primary_color, extracted.secondary_color
        ),
    }
}
