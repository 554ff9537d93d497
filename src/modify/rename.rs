//! Rename branch: swaps the business name of an existing app.

use crate::models::{GeneratedApp, ModificationResult};
use regex::Regex;

/// Applies a rename request, or returns `None` when the request does not
/// parse as a "change X to Y" phrasing whose subject mentions a name or
/// title (the caller falls through to the catch-all).
///
/// The old name is replaced by literal substitution across every file, so
/// a name the user already edited out of a file simply stays absent there.
pub fn apply(request: &str, existing: &GeneratedApp) -> Option<ModificationResult> {
    let re = Regex::new(r#"(?i)change\s+(?:the\s+)?(.+?)\s+to\s+["']?(.+?)["']?$"#)
        .expect("rename pattern is a valid regex");
    let captures = re.captures(request)?;

    let subject = captures.get(1)?.as_str().to_lowercase();
    if !subject.contains("name") && !subject.contains("title") {
        return None;
    }
    let new_name = captures.get(2)?.as_str();

    let old_name = &existing.customizations.business_name;
    let files = if old_name.is_empty() {
        existing.files.clone()
    } else {
        super::substitute_all(&existing.files, old_name, new_name)
    };

    let mut customizations = existing.customizations.clone();
    customizations.business_name = new_name.to_string();

    Some(ModificationResult {
        files,
        customizations,
        summary: format!("Changed business name to \"{new_name}\""),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TemplateCategory;
    use crate::modify::tests::test_app;

    #[test]
    fn test_rename_replaces_name_everywhere() {
        let app = test_app(TemplateCategory::Business);
        let result = apply("change the name to Acme Consulting", &app).unwrap();

        assert_eq!(result.customizations.business_name, "Acme Consulting");
        for (path, content) in &result.files {
            assert!(
                !content.contains("Tasty Corner"),
                "old name still present in {path}"
            );
        }
        assert!(result.files["screens/HomeScreen.js"].contains("Acme Consulting"));
        assert_eq!(
            result.summary,
            "Changed business name to \"Acme Consulting\""
        );
    }

    #[test]
    fn test_rename_accepts_title_subject_and_quotes() {
        let app = test_app(TemplateCategory::Restaurant);
        let result = apply("change the title to \"Bella's Bistro\"", &app).unwrap();
        assert_eq!(result.customizations.business_name, "Bella's Bistro");
        assert!(result.files["App.js"].contains("Bella's Bistro"));
    }

    #[test]
    fn test_rename_keeps_colors() {
        let app = test_app(TemplateCategory::Business);
        let result = apply("change the name to Acme", &app).unwrap();
        assert_eq!(
            result.customizations.primary_color,
            app.customizations.primary_color
        );
        assert_eq!(
            result.customizations.background_color,
            app.customizations.background_color
        );
    }

    #[test]
    fn test_rename_rejects_other_subjects() {
        let app = test_app(TemplateCategory::Business);
        // "change"+"text" dispatches here, but the parsed subject is
        // neither a name nor a title.
        assert!(apply("change the welcome text to Hello", &app).is_none());
    }

    #[test]
    fn test_rename_rejects_unparseable_request() {
        let app = test_app(TemplateCategory::Business);
        assert!(apply("change everything, please", &app).is_none());
    }
}
