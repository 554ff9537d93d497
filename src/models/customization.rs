//! Customization record: the identity and theme-color tuple applied to
//! a template's source files.

use crate::models::ThemeColor;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default primary theme color.
pub const DEFAULT_PRIMARY: &str = "#007AFF";
/// Default secondary theme color.
pub const DEFAULT_SECONDARY: &str = "#FF3B30";
/// Default background color.
pub const DEFAULT_BACKGROUND: &str = "#F2F2F7";
/// Default business name when no name can be extracted from a request.
pub const DEFAULT_BUSINESS_NAME: &str = "My Business";

/// Identity and theme applied to a generated application.
///
/// All four fields are always present; construction applies defaults for
/// anything unspecified, so a record is never partially invalid. Colors are
/// `#RRGGBB` hex strings because they are substituted verbatim into
/// generated source text.
///
/// Field names serialize in camelCase to match the JSON contract used by
/// the web API and the persisted app snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationRecord {
    /// Human-readable identity, substituted verbatim into source and titles.
    pub business_name: String,
    /// Primary theme color as a `#RRGGBB` hex string.
    pub primary_color: String,
    /// Secondary theme color as a `#RRGGBB` hex string.
    pub secondary_color: String,
    /// Background color as a `#RRGGBB` hex string.
    pub background_color: String,
}

impl Default for CustomizationRecord {
    fn default() -> Self {
        Self {
            business_name: DEFAULT_BUSINESS_NAME.to_string(),
            primary_color: DEFAULT_PRIMARY.to_string(),
            secondary_color: DEFAULT_SECONDARY.to_string(),
            background_color: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

impl CustomizationRecord {
    /// Validates that every color field is a well-formed `#RRGGBB` string.
    ///
    /// The business name is deliberately not validated: it may contain
    /// arbitrary characters. Consumers that embed it into identifiers must
    /// strip whitespace themselves (see [`Self::app_identifier`]).
    ///
    /// # Errors
    ///
    /// Returns an error naming the first malformed color field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("primaryColor", &self.primary_color),
            ("secondaryColor", &self.secondary_color),
            ("backgroundColor", &self.background_color),
        ] {
            if !value.starts_with('#') {
                anyhow::bail!("{field} '{value}' must be prefixed with '#'");
            }
            ThemeColor::from_hex(value)
                .map_err(|e| anyhow::anyhow!("{field} is not a valid color: {e}"))?;
        }
        Ok(())
    }

    /// Derives the app identifier: the business name with all whitespace
    /// stripped, suffixed with "App".
    ///
    /// # Examples
    ///
    /// ```
    /// use appforge::models::CustomizationRecord;
    ///
    /// let record = CustomizationRecord {
    ///     business_name: "Mario's Pizza Palace".to_string(),
    ///     ..CustomizationRecord::default()
    /// };
    /// assert_eq!(record.app_identifier(), "Mario'sPizzaPalaceApp");
    /// ```
    #[must_use]
    pub fn app_identifier(&self) -> String {
        let stripped: String = self
            .business_name
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        format!("{stripped}App")
    }

    /// Replaces the three color fields with the colors from `other`,
    /// leaving the business name untouched.
    pub fn merge_colors(&mut self, other: &Self) {
        self.primary_color.clone_from(&other.primary_color);
        self.secondary_color.clone_from(&other.secondary_color);
        self.background_color.clone_from(&other.background_color);
    }
}
