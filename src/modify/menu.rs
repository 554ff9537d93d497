//! Menu-item branch: appends a priced item to the restaurant menu array.

use crate::models::{GeneratedApp, ModificationResult};
use regex::Regex;

/// Parses an item name and price out of an add-item request.
///
/// Matches phrasings like "add Garlic Bread for $5.99", "add Lemonade at
/// 3.50" and "add Tiramisu priced at $8". The dollar sign is optional and
/// cents, when present, must be two digits.
#[must_use]
pub fn parse_menu_item_request(request: &str) -> Option<(String, f64)> {
    let re = Regex::new(r"(?i)add\s+(.+?)\s+(?:for|at|priced at)?\s*\$?(\d+(?:\.\d{2})?)")
        .expect("item pattern is a valid regex");
    let captures = re.captures(request)?;

    let name = captures.get(1)?.as_str().trim().to_string();
    let price: f64 = captures.get(2)?.as_str().parse().ok()?;
    Some((name, price))
}

/// Applies an add-menu-item request, or returns `None` when the request or
/// the menu screen does not parse (the caller falls through to the next
/// branch).
///
/// The new entry's id is one more than the number of `id:` occurrences in
/// the current array block. Ids are therefore unique as long as the menu
/// only grows through this operation; they are positional, not stable
/// across manual deletions.
pub fn apply(request: &str, existing: &GeneratedApp) -> Option<ModificationResult> {
    let (name, price) = parse_menu_item_request(request)?;
    let menu = existing.files.get(GeneratedApp::MENU_SCREEN)?;

    let array_re =
        Regex::new(r"(?s)const menuItems = \[(.*?)\];").expect("array pattern is a valid regex");
    let captures = array_re.captures(menu)?;
    let block = captures.get(0)?;
    let items = captures.get(1)?.as_str();

    let id_re = Regex::new(r"id:\s*\d+").expect("id pattern is a valid regex");
    let next_id = id_re.find_iter(items).count() + 1;

    let entry = format!(
        "\n  {{ id: {next_id}, name: '{name}', price: {price}, description: 'Delicious {}' }},",
        name.to_lowercase()
    );
    let mut updated = menu.clone();
    updated.replace_range(
        block.range(),
        &format!("const menuItems = [{items}{entry}\n];"),
    );

    let mut files = existing.files.clone();
    files.insert(GeneratedApp::MENU_SCREEN.to_string(), updated);

    Some(ModificationResult {
        files,
        customizations: existing.customizations.clone(),
        summary: format!("Added \"{name}\" to the menu for ${price}"),
    })
}
