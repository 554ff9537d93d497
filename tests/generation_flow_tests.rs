//! Integration tests for the full generate-then-modify pipeline through
//! the library API.

use appforge::generator::{GenerationOutcome, Generator};
use appforge::models::{GeneratedApp, TemplateCategory};
use appforge::modify;

fn generate(input: &str) -> GeneratedApp {
    Generator::new(None)
        .generate_new(input)
        .expect("generation should succeed")
}

fn apply(app: &mut GeneratedApp, request: &str) -> String {
    let result = modify::modify(request, app).expect("modification should succeed");
    app.files = result.files;
    app.customizations = result.customizations;
    result.summary
}

#[test]
fn test_every_category_generates_valid_app() {
    let inputs = [
        ("a pizza place called Slice", TemplateCategory::Restaurant),
        (
            "a consulting company called Acme",
            TemplateCategory::Business,
        ),
        ("an online store called Cartful", TemplateCategory::Ecommerce),
        ("a gym called Iron Works", TemplateCategory::Fitness),
        (
            "a local listing directory called FindIt",
            TemplateCategory::Directory,
        ),
    ];

    for (input, expected) in inputs {
        let app = generate(input);
        assert_eq!(app.template, expected, "category for '{input}'");
        assert!(app.validate().is_ok(), "validation for '{input}'");
        assert!(app.files.contains_key(GeneratedApp::ENTRY_POINT));
        assert!(app.files.contains_key(GeneratedApp::MANIFEST));
        assert!(!app.features.is_empty());
    }
}

#[test]
fn test_generated_files_carry_customizations() {
    let app = generate("a blue restaurant app called Bella's Bistro");

    assert_eq!(app.customizations.primary_color, "#007AFF");
    assert!(app.files["App.js"].contains("Bella's Bistro"));
    let manifest = &app.files[GeneratedApp::MANIFEST];
    assert!(manifest.contains("\"name\": \"Bella'sBistroApp\""));
    for content in app.files.values() {
        assert!(!content.contains("THEME_PRIMARY"));
        assert!(!content.contains("BUSINESS_NAME"));
    }
}

#[test]
fn test_sequential_modifications_accumulate() {
    let mut app = generate("a restaurant app called Tasty Corner");

    let summary = apply(&mut app, "change the color to green");
    assert!(summary.starts_with("Changed colors to:"));

    let summary = apply(&mut app, "On the menu, add Garlic Bread for $5.99");
    assert_eq!(summary, "Added \"Garlic Bread\" to the menu for $5.99");

    let summary = apply(&mut app, "change the name to Corner Kitchen");
    assert_eq!(summary, "Changed business name to \"Corner Kitchen\"");

    // All three edits are present in the final state.
    let menu = &app.files[GeneratedApp::MENU_SCREEN];
    assert!(menu.contains("#34C759"));
    assert!(menu.contains("Garlic Bread"));
    assert!(app.files["App.js"].contains("Corner Kitchen"));
    assert_eq!(app.customizations.business_name, "Corner Kitchen");
    assert!(app.validate().is_ok());
}

#[test]
fn test_modification_preserves_manual_edits() {
    let mut app = generate("a restaurant app called Tasty Corner");

    // A user edit through the preview editor: extra text the templates
    // never produced.
    let edited = format!("// hand-tuned\n{}", app.files["App.js"]);
    app.files.insert("App.js".to_string(), edited);

    apply(&mut app, "change the color to purple");

    assert!(app.files["App.js"].starts_with("// hand-tuned\n"));
    assert!(app.files[GeneratedApp::MENU_SCREEN].contains("#AF52DE"));
}

#[test]
fn test_menu_ids_stay_sequential_across_additions() {
    let mut app = generate("a restaurant app called Tasty Corner");

    apply(&mut app, "On the menu, add Garlic Bread for $5.99");
    apply(&mut app, "On the menu, add Lemonade for $3.50");

    let menu = &app.files[GeneratedApp::MENU_SCREEN];
    assert!(menu.contains("{ id: 6, name: 'Garlic Bread'"));
    assert!(menu.contains("{ id: 7, name: 'Lemonade'"));
}

#[test]
fn test_process_routes_change_requests() {
    let generator = Generator::new(None);
    let app = generate("a restaurant app called Tasty Corner");

    // "change the color to blue" on an existing app must modify, not
    // regenerate, even though the text alone classifies as a new request.
    let outcome = generator
        .process("change the color to blue", Some(&app))
        .unwrap();
    assert!(matches!(outcome, GenerationOutcome::Modified(_)));

    let outcome = generator.process("change the color to blue", None).unwrap();
    assert!(matches!(outcome, GenerationOutcome::New(_)));
}
