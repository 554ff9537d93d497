//! Generated application state and modification results.

use crate::models::{CustomizationRecord, TemplateCategory};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A fresh file set produced by the template catalog for one category.
///
/// This is the catalog's output before the orchestrator wraps it into a
/// [`GeneratedApp`]: a display name, the human-readable feature labels, and
/// the complete source files with customizations already substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTemplate {
    /// Display name of the template (e.g., "Restaurant App").
    pub name: String,
    /// Capability labels shown to the user, in display order.
    pub features: Vec<String>,
    /// Complete source files keyed by relative path.
    pub files: BTreeMap<String, String>,
}

/// A complete generated application snapshot.
///
/// Owned by the caller after generation; the core never retains references
/// across calls. Every entry in `files` is a complete, self-contained file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedApp {
    /// Derived app identifier (business name with whitespace stripped + "App").
    pub app_name: String,
    /// Which of the five archetypes this app was generated from.
    pub template: TemplateCategory,
    /// Display name of the template.
    pub template_name: String,
    /// Capability labels in display order. Order is preserved across
    /// modifications unless explicitly changed.
    pub features: Vec<String>,
    /// Complete source files keyed by relative path.
    pub files: BTreeMap<String, String>,
    /// The identity/theme record the files were rendered with.
    pub customizations: CustomizationRecord,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
}

impl GeneratedApp {
    /// Relative path of the entry-point file every app must contain.
    pub const ENTRY_POINT: &'static str = "App.js";
    /// Relative path of the manifest file every app must contain.
    pub const MANIFEST: &'static str = "package.json";
    /// Relative path of the restaurant menu screen.
    pub const MENU_SCREEN: &'static str = "screens/MenuScreen.js";

    /// Checks the structural invariants of an app snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the file map is empty, the entry point or
    /// manifest is missing, or a restaurant app has no menu screen.
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            anyhow::bail!("Generated app has no files");
        }
        if !self.files.contains_key(Self::ENTRY_POINT) {
            anyhow::bail!("Generated app is missing entry point '{}'", Self::ENTRY_POINT);
        }
        if !self.files.contains_key(Self::MANIFEST) {
            anyhow::bail!("Generated app is missing manifest '{}'", Self::MANIFEST);
        }
        if self.template == TemplateCategory::Restaurant
            && !self.files.contains_key(Self::MENU_SCREEN)
        {
            anyhow::bail!(
                "Restaurant app is missing menu screen '{}'",
                Self::MENU_SCREEN
            );
        }
        Ok(())
    }
}

/// The outcome of one modification request.
///
/// `files` is a full replacement set with the same keys as the input unless
/// an operation introduced a new file. `summary` is exactly one
/// human-readable sentence and is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModificationResult {
    /// Full replacement file set.
    pub files: BTreeMap<String, String>,
    /// Customization record after the modification (possibly unchanged).
    pub customizations: CustomizationRecord,
    /// One sentence describing what changed.
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_app(template: TemplateCategory) -> GeneratedApp {
        let mut files = BTreeMap::new();
        files.insert("App.js".to_string(), "export default {}".to_string());
        files.insert("package.json".to_string(), "{}".to_string());

        GeneratedApp {
            app_name: "MyBusinessApp".to_string(),
            template,
            template_name: template.display_name().to_string(),
            features: vec!["Feature".to_string()],
            files,
            customizations: CustomizationRecord::default(),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_validate_accepts_minimal_business_app() {
        let app = minimal_app(TemplateCategory::Business);
        assert!(app.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_files() {
        let mut app = minimal_app(TemplateCategory::Business);
        app.files.clear();
        assert!(app.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_entry_point() {
        let mut app = minimal_app(TemplateCategory::Business);
        app.files.remove("App.js");
        assert!(app.validate().is_err());
    }

    #[test]
    fn test_validate_restaurant_requires_menu_screen() {
        let mut app = minimal_app(TemplateCategory::Restaurant);
        assert!(app.validate().is_err());

        app.files.insert(
            "screens/MenuScreen.js".to_string(),
            "const menuItems = [];".to_string(),
        );
        assert!(app.validate().is_ok());
    }

    #[test]
    fn test_app_snapshot_serde_round_trip() {
        let app = minimal_app(TemplateCategory::Fitness);
        let json = serde_json::to_string(&app).unwrap();
        let parsed: GeneratedApp = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, app);
    }
}
