//! Static template catalog.
//!
//! Produces a fresh file set and feature list for a chosen category and
//! customization record. Generation is a pure function with no failure
//! mode: every category has a generator, and dispatch is an exhaustive
//! `match` so a new category cannot be forgotten at compile time.
//!
//! Template sources are stored with named placeholders (`THEME_PRIMARY`,
//! `BUSINESS_NAME`, ...) and rendered by literal substitution, which keeps
//! the substitution points explicit.

mod business;
mod directory;
mod ecommerce;
mod fitness;
mod restaurant;

use crate::models::{CustomizationRecord, GeneratedTemplate, TemplateCategory};

/// Placeholder for the primary theme color in template sources.
const THEME_PRIMARY: &str = "THEME_PRIMARY";
/// Placeholder for the secondary theme color in template sources.
const THEME_SECONDARY: &str = "THEME_SECONDARY";
/// Placeholder for the background color in template sources.
const THEME_BACKGROUND: &str = "THEME_BACKGROUND";
/// Placeholder for the verbatim business name in template sources.
const BUSINESS_NAME: &str = "BUSINESS_NAME";
/// Placeholder for the whitespace-stripped app identifier.
const APP_IDENTIFIER: &str = "APP_IDENTIFIER";

/// Generates a fresh template for the given category and customizations.
#[must_use]
pub fn generate(
    category: TemplateCategory,
    customizations: &CustomizationRecord,
) -> GeneratedTemplate {
    let (features, files): (&[&str], &[(&str, &str)]) = match category {
        TemplateCategory::Restaurant => (restaurant::FEATURES, restaurant::FILES),
        TemplateCategory::Business => (business::FEATURES, business::FILES),
        TemplateCategory::Ecommerce => (ecommerce::FEATURES, ecommerce::FILES),
        TemplateCategory::Fitness => (fitness::FEATURES, fitness::FILES),
        TemplateCategory::Directory => (directory::FEATURES, directory::FILES),
    };

    GeneratedTemplate {
        name: category.display_name().to_string(),
        features: features.iter().map(ToString::to_string).collect(),
        files: files
            .iter()
            .map(|(path, source)| ((*path).to_string(), apply_customizations(source, customizations)))
            .collect(),
    }
}

/// Renders a template source by substituting every placeholder with the
/// corresponding customization value.
fn apply_customizations(source: &str, customizations: &CustomizationRecord) -> String {
    source
        .replace(THEME_PRIMARY, &customizations.primary_color)
        .replace(THEME_SECONDARY, &customizations.secondary_color)
        .replace(THEME_BACKGROUND, &customizations.background_color)
        .replace(APP_IDENTIFIER, &customizations.app_identifier())
        .replace(BUSINESS_NAME, &customizations.business_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeneratedApp;

    fn record() -> CustomizationRecord {
        CustomizationRecord {
            business_name: "Testable Eats".to_string(),
            primary_color: "#112233".to_string(),
            secondary_color: "#445566".to_string(),
            background_color: "#778899".to_string(),
        }
    }

    #[test]
    fn test_every_category_has_entry_point_and_manifest() {
        for category in TemplateCategory::ALL {
            let template = generate(category, &record());
            assert!(
                template.files.contains_key(GeneratedApp::ENTRY_POINT),
                "{category} template missing App.js"
            );
            assert!(
                template.files.contains_key(GeneratedApp::MANIFEST),
                "{category} template missing package.json"
            );
            assert!(!template.features.is_empty());
        }
    }

    #[test]
    fn test_no_placeholder_survives_rendering() {
        for category in TemplateCategory::ALL {
            let template = generate(category, &record());
            for (path, content) in &template.files {
                for placeholder in [
                    THEME_PRIMARY,
                    THEME_SECONDARY,
                    THEME_BACKGROUND,
                    BUSINESS_NAME,
                    APP_IDENTIFIER,
                ] {
                    assert!(
                        !content.contains(placeholder),
                        "{category}:{path} still contains {placeholder}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_colors_substituted_into_styles() {
        let template = generate(TemplateCategory::Restaurant, &record());
        let menu = &template.files[GeneratedApp::MENU_SCREEN];
        assert!(menu.contains("#112233"));
        assert!(menu.contains("#445566"));
        assert!(menu.contains("#778899"));
    }

    #[test]
    fn test_restaurant_menu_has_literal_item_array() {
        let template = generate(TemplateCategory::Restaurant, &record());
        let menu = &template.files[GeneratedApp::MENU_SCREEN];
        assert!(menu.contains("const menuItems = ["));
        assert_eq!(menu.matches("id:").count(), 5);
        assert!(menu.contains("Margherita Pizza"));
    }

    #[test]
    fn test_business_name_in_manifest_is_stripped() {
        let template = generate(TemplateCategory::Business, &record());
        let manifest = &template.files[GeneratedApp::MANIFEST];
        assert!(manifest.contains("\"name\": \"TestableEatsApp\""));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            generate(TemplateCategory::Ecommerce, &record()).name,
            "E-commerce App"
        );
        assert_eq!(
            generate(TemplateCategory::Business, &record()).name,
            "Business/Service App"
        );
    }
}
