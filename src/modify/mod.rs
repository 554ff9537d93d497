//! Modification engine: applies a free-text edit request to an existing
//! generated app.
//!
//! Dispatch is keyword-driven and evaluated in a fixed priority order; the
//! first matching branch executes and returns, and later branches are not
//! tried even if they would also match. The mutation primitive is literal
//! substitution (exact-string, all-occurrences) over rendered file text, so
//! user-made manual edits survive modification requests as long as the
//! substituted tokens are still present verbatim.
//!
//! Recognized-but-unsatisfiable requests are not errors: they resolve to
//! the catch-all result with an explanatory summary. Only structural
//! problems with the input (an empty file map) propagate as errors.

mod menu;
mod recolor;
mod rename;

use crate::models::{GeneratedApp, ModificationResult, TemplateCategory};
use anyhow::Result;

pub use menu::parse_menu_item_request;

/// Summary returned by the generic add-screen branch.
///
/// The branch recognizes intent but performs no file mutation; this is a
/// deliberately unimplemented capability, and the summary still
/// communicates that the intent was understood.
pub const ADD_SCREEN_SUMMARY: &str = "Added new screen functionality";

/// Summary returned when no branch recognized the request.
pub const CATCH_ALL_SUMMARY: &str =
    "No specific changes were made. Try being more specific about what you want to change.";

/// Which mutation strategy a request dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModificationKind {
    /// Theme color replacement across all files.
    Recolor,
    /// Append an item to the restaurant menu array.
    AddMenuItem,
    /// Recognized add-screen intent (no mutation).
    AddScreen,
    /// Business name replacement across all files.
    Rename,
    /// Nothing recognized; designed no-op.
    Unrecognized,
}

/// Classifies a request against the existing app without applying anything.
///
/// Evaluation order is the engine's fixed branch priority, so the returned
/// kind is exactly the branch [`modify`] would execute.
#[must_use]
pub fn classify_request(request: &str, existing: &GeneratedApp) -> ModificationKind {
    let lower = request.to_lowercase();

    if lower.contains("change") && (lower.contains("color") || lower.contains("theme")) {
        return ModificationKind::Recolor;
    }

    if lower.contains("add") || lower.contains("include") {
        if existing.template == TemplateCategory::Restaurant
            && (lower.contains("menu") || lower.contains("item"))
            && existing.files.contains_key(GeneratedApp::MENU_SCREEN)
        {
            return ModificationKind::AddMenuItem;
        }
        if lower.contains("screen") || lower.contains("page") {
            return ModificationKind::AddScreen;
        }
    }

    if lower.contains("change")
        && (lower.contains("text") || lower.contains("title") || lower.contains("name"))
    {
        return ModificationKind::Rename;
    }

    ModificationKind::Unrecognized
}

/// Applies a modification request to an existing app.
///
/// Each call is pure given its inputs: the engine never retains references
/// across calls, and the caller owns the returned state.
///
/// # Errors
///
/// Returns an error only for structural problems with the input (an empty
/// `files` map). Everything else resolves to a normal result, falling back
/// to the catch-all summary when the request was not understood.
pub fn modify(request: &str, existing: &GeneratedApp) -> Result<ModificationResult> {
    if existing.files.is_empty() {
        anyhow::bail!("Cannot modify an app with no files");
    }

    let lower = request.to_lowercase();

    match classify_request(request, existing) {
        ModificationKind::Recolor => Ok(recolor::apply(request, existing)),
        ModificationKind::AddMenuItem => {
            if let Some(result) = menu::apply(request, existing) {
                return Ok(result);
            }
            // Item pattern or array block not found: fall through to the
            // generic add branch, then the catch-all.
            if lower.contains("screen") || lower.contains("page") {
                Ok(add_screen_result(existing))
            } else {
                Ok(catch_all_result(existing))
            }
        }
        ModificationKind::AddScreen => Ok(add_screen_result(existing)),
        ModificationKind::Rename => {
            if let Some(result) = rename::apply(request, existing) {
                return Ok(result);
            }
            Ok(catch_all_result(existing))
        }
        ModificationKind::Unrecognized => Ok(catch_all_result(existing)),
    }
}

/// Intent-recognized, no-mutation result for the add-screen branch.
fn add_screen_result(existing: &GeneratedApp) -> ModificationResult {
    ModificationResult {
        files: existing.files.clone(),
        customizations: existing.customizations.clone(),
        summary: ADD_SCREEN_SUMMARY.to_string(),
    }
}

/// Designed no-op: original files and customizations, explanatory summary.
fn catch_all_result(existing: &GeneratedApp) -> ModificationResult {
    ModificationResult {
        files: existing.files.clone(),
        customizations: existing.customizations.clone(),
        summary: CATCH_ALL_SUMMARY.to_string(),
    }
}

/// Replaces every occurrence of `from` with `to` in every file.
///
/// Exact string match, case-sensitive, all occurrences, no per-file
/// scoping: if several files share the literal value, all of them are
/// updated. Files that do not contain the literal are left unchanged,
/// which is not an error.
fn substitute_all(
    files: &std::collections::BTreeMap<String, String>,
    from: &str,
    to: &str,
) -> std::collections::BTreeMap<String, String> {
    files
        .iter()
        .map(|(path, content)| (path.clone(), content.replace(from, to)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomizationRecord;
    use crate::templates;
    use chrono::Utc;

    pub(super) fn test_app(category: TemplateCategory) -> GeneratedApp {
        let customizations = CustomizationRecord {
            business_name: "Tasty Corner".to_string(),
            ..CustomizationRecord::default()
        };
        let template = templates::generate(category, &customizations);

        GeneratedApp {
            app_name: customizations.app_identifier(),
            template: category,
            template_name: template.name,
            features: template.features,
            files: template.files,
            customizations,
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_classify_recolor_beats_rename() {
        let app = test_app(TemplateCategory::Business);
        // Contains both "change"+"color" and "change"+"name" triggers;
        // recolor has higher priority.
        assert_eq!(
            classify_request("change the name color to blue", &app),
            ModificationKind::Recolor
        );
    }

    #[test]
    fn test_classify_menu_requires_restaurant() {
        let restaurant = test_app(TemplateCategory::Restaurant);
        let fitness = test_app(TemplateCategory::Fitness);

        assert_eq!(
            classify_request("add Garlic Bread to the menu for $5.99", &restaurant),
            ModificationKind::AddMenuItem
        );
        assert_eq!(
            classify_request("add Garlic Bread to the menu for $5.99", &fitness),
            ModificationKind::Unrecognized
        );
    }

    // Known quirk: the menu branch triggers on the words "menu" or "item",
    // so a bare "add X for $Y" phrasing is not recognized at all.
    #[test]
    fn test_classify_bare_add_with_price_is_unrecognized() {
        let app = test_app(TemplateCategory::Restaurant);
        assert_eq!(
            classify_request("add Garlic Bread for $5.99", &app),
            ModificationKind::Unrecognized
        );

        let result = modify("add Garlic Bread for $5.99", &app).unwrap();
        assert_eq!(result.files, app.files);
        assert_eq!(result.summary, CATCH_ALL_SUMMARY);
    }

    #[test]
    fn test_classify_menu_requires_menu_file() {
        let mut app = test_app(TemplateCategory::Restaurant);
        app.files.remove(GeneratedApp::MENU_SCREEN);
        assert_eq!(
            classify_request("add an item for $3.50", &app),
            ModificationKind::Unrecognized
        );
    }

    #[test]
    fn test_classify_add_screen() {
        let app = test_app(TemplateCategory::Fitness);
        assert_eq!(
            classify_request("please include a settings page", &app),
            ModificationKind::AddScreen
        );
        assert_eq!(
            classify_request("add a profile screen", &app),
            ModificationKind::AddScreen
        );
    }

    #[test]
    fn test_classify_rename() {
        let app = test_app(TemplateCategory::Business);
        assert_eq!(
            classify_request("change the title to \"New Name\"", &app),
            ModificationKind::Rename
        );
    }

    #[test]
    fn test_classify_unrecognized() {
        let app = test_app(TemplateCategory::Business);
        assert_eq!(
            classify_request("make it better", &app),
            ModificationKind::Unrecognized
        );
    }

    #[test]
    fn test_modify_empty_files_is_structural_error() {
        let mut app = test_app(TemplateCategory::Business);
        app.files.clear();
        assert!(modify("change the color to blue", &app).is_err());
    }

    #[test]
    fn test_catch_all_returns_identical_files() {
        let app = test_app(TemplateCategory::Business);
        let result = modify("make it better", &app).unwrap();

        assert_eq!(result.files, app.files);
        assert_eq!(result.customizations, app.customizations);
        assert_eq!(result.summary, CATCH_ALL_SUMMARY);
        assert!(!result.summary.is_empty());
    }

    #[test]
    fn test_add_screen_is_noop_with_summary() {
        let app = test_app(TemplateCategory::Directory);
        let result = modify("add a reviews screen", &app).unwrap();

        assert_eq!(result.files, app.files);
        assert_eq!(result.summary, ADD_SCREEN_SUMMARY);
    }

    #[test]
    fn test_substitute_all_replaces_everywhere() {
        let mut files = std::collections::BTreeMap::new();
        files.insert("a.js".to_string(), "#FF0000 and #FF0000".to_string());
        files.insert("b.js".to_string(), "color: '#FF0000'".to_string());
        files.insert("c.js".to_string(), "no colors here".to_string());

        let replaced = substitute_all(&files, "#FF0000", "#00FF00");
        assert_eq!(replaced["a.js"], "#00FF00 and #00FF00");
        assert_eq!(replaced["b.js"], "color: '#00FF00'");
        assert_eq!(replaced["c.js"], "no colors here");
    }
}
