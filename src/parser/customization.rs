//! Customization extraction from free-text requests.
//!
//! Turns a natural-language request into a structured identity/theme record:
//! a business name pulled from "called X"/"for X" phrasings and a primary
//! color matched against a fixed nine-color palette.

use crate::models::{CustomizationRecord, ThemeColor};
use regex::Regex;

/// Fixed palette of named colors recognized in requests.
///
/// Order matters: entries are checked in this table order and a later entry
/// overwrites an earlier match. When a request names several palette colors,
/// the LAST entry in this table wins, not the last color mentioned in the
/// text. This is a documented quirk of the extractor, preserved on purpose,
/// not an ordering guarantee over text position.
pub const COLOR_PALETTE: [(&str, &str); 9] = [
    ("red", "#FF3B30"),
    ("blue", "#007AFF"),
    ("green", "#34C759"),
    ("purple", "#AF52DE"),
    ("orange", "#FF9500"),
    ("pink", "#FF2D92"),
    ("yellow", "#FFCC00"),
    ("teal", "#5AC8FA"),
    ("indigo", "#5856D6"),
];

/// Percentage used to derive the secondary color from a matched primary.
const SECONDARY_DARKEN_PERCENT: u8 = 20;

/// Extracts a customization record from a free-text request.
///
/// Unspecified fields keep their defaults, so the result is always fully
/// populated. The extracted business name is not validated or sanitized;
/// consumers that embed it into identifiers must strip whitespace
/// themselves.
///
/// # Examples
///
/// ```
/// use appforge::parser::extract_customizations;
///
/// let record = extract_customizations("Create a blog about dogs called Pawsome");
/// assert_eq!(record.business_name, "Pawsome");
///
/// let record = extract_customizations("make it blue");
/// assert_eq!(record.primary_color, "#007AFF");
/// ```
#[must_use]
pub fn extract_customizations(text: &str) -> CustomizationRecord {
    let mut record = CustomizationRecord::default();

    if let Some(name) = extract_business_name(text) {
        record.business_name = name;
    }

    let lower = text.to_lowercase();
    for (name, hex) in COLOR_PALETTE {
        if lower.contains(name) {
            record.primary_color = hex.to_string();
            // Secondary is derived from the primary, replacing the default
            let primary = ThemeColor::from_hex(hex).expect("palette entries are valid hex");
            record.secondary_color = primary.darken(SECONDARY_DARKEN_PERCENT).to_hex();
        }
    }

    record
}

/// Tries the name patterns in priority order and returns the first match.
///
/// Patterns, in order:
/// 1. "called X" / "named X"
/// 2. "for X" / "app for X"
/// 3. "build/create/make ... for/called X"
///
/// Whitespace is trimmed and a trailing "app"/"application"/"mobile app"
/// suffix is stripped case-insensitively.
fn extract_business_name(text: &str) -> Option<String> {
    let patterns = [
        r"(?i)(?:called|named)\s+([^,.\n!?]+)",
        r"(?i)(?:for|app for)\s+([^,.\n!?]+)",
        r"(?i)(?:building|build|create|make).*?(?:for|called)\s+([^,.\n!?]+)",
    ];

    for pattern in patterns {
        let re = Regex::new(pattern).expect("name pattern is a valid regex");
        if let Some(captures) = re.captures(text) {
            let raw = captures.get(1)?.as_str().trim();
            let suffix = Regex::new(r"(?i)\s+(app|application|mobile app)$")
                .expect("suffix pattern is a valid regex");
            let name = suffix.replace(raw, "").to_string();
            return Some(name);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::customization::{DEFAULT_BUSINESS_NAME, DEFAULT_SECONDARY};

    #[test]
    fn test_defaults_when_nothing_matches() {
        let record = extract_customizations("make it better please");
        assert_eq!(record, CustomizationRecord::default());
    }

    #[test]
    fn test_name_from_called_pattern() {
        let record = extract_customizations("I want an app called Bella's Bistro");
        assert_eq!(record.business_name, "Bella's Bistro");
    }

    #[test]
    fn test_name_from_named_pattern() {
        let record = extract_customizations("something named Iron Works");
        assert_eq!(record.business_name, "Iron Works");
    }

    #[test]
    fn test_name_from_for_pattern() {
        let record = extract_customizations("an app for Sunrise Yoga");
        assert_eq!(record.business_name, "Sunrise Yoga");
    }

    #[test]
    fn test_name_strips_app_suffix() {
        let record = extract_customizations("called Pawsome app");
        assert_eq!(record.business_name, "Pawsome");

        let record = extract_customizations("called Pawsome Mobile App");
        assert_eq!(record.business_name, "Pawsome");

        let record = extract_customizations("called Pawsome APPLICATION");
        assert_eq!(record.business_name, "Pawsome");
    }

    #[test]
    fn test_name_stops_at_punctuation() {
        let record = extract_customizations("called Crafty, with a red theme");
        assert_eq!(record.business_name, "Crafty");
    }

    #[test]
    fn test_no_name_keeps_default() {
        let record = extract_customizations("change the color to teal");
        assert_eq!(record.business_name, DEFAULT_BUSINESS_NAME);
    }

    #[test]
    fn test_single_color_sets_primary_and_darkened_secondary() {
        let record = extract_customizations("make it blue");
        assert_eq!(record.primary_color, "#007AFF");

        // Secondary must be the 20%-darkened primary, not the default
        let primary = ThemeColor::from_hex("#007AFF").unwrap();
        let secondary = ThemeColor::from_hex(&record.secondary_color).unwrap();
        assert_eq!(secondary, primary.darken(20));
        assert_ne!(record.secondary_color, DEFAULT_SECONDARY);
    }

    #[test]
    fn test_secondary_strictly_darker_for_every_palette_color() {
        for (name, hex) in COLOR_PALETTE {
            let record = extract_customizations(&format!("use a {name} theme"));
            assert_eq!(record.primary_color, hex, "primary for '{name}'");

            let primary = ThemeColor::from_hex(hex).unwrap();
            let secondary = ThemeColor::from_hex(&record.secondary_color).unwrap();
            assert!(secondary.r <= primary.r);
            assert!(secondary.g <= primary.g);
            assert!(secondary.b <= primary.b);
            assert!(
                secondary.r < primary.r || secondary.g < primary.g || secondary.b < primary.b,
                "secondary for '{name}' must be strictly darker"
            );
        }
    }

    #[test]
    fn test_color_match_is_case_insensitive() {
        let record = extract_customizations("I want it PURPLE");
        assert_eq!(record.primary_color, "#AF52DE");
    }

    // Known quirk: with multiple palette colors in the text, the winner is
    // the last entry in the palette table, not the last color mentioned.
    #[test]
    fn test_multiple_colors_last_table_entry_wins() {
        // "teal" comes after "red" in the table even though the text says
        // red last.
        let record = extract_customizations("teal at first, then I said red");
        assert_eq!(record.primary_color, "#5AC8FA");

        // "indigo" is the final table entry so it beats everything.
        let record = extract_customizations("indigo or maybe blue or green");
        assert_eq!(record.primary_color, "#5856D6");
    }

    #[test]
    fn test_name_and_color_together() {
        let record = extract_customizations("create an app called Fresh Greens with a green theme");
        assert_eq!(record.business_name, "Fresh Greens with a green theme");
        assert_eq!(record.primary_color, "#34C759");
    }
}
