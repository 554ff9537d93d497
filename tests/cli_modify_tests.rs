//! End-to-end tests for the `appforge modify` command.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Path to the appforge binary
fn appforge_bin() -> &'static str {
    env!("CARGO_BIN_EXE_appforge")
}

/// Generates a restaurant app snapshot for modification tests.
fn generate_snapshot(state: &Path) {
    let output = Command::new(appforge_bin())
        .args([
            "generate",
            "a restaurant app called Tasty Corner",
            "--offline",
            "--state",
            state.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "Setup generation failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_modify_recolor_updates_snapshot() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let state = temp.path().join("app.json");
    generate_snapshot(&state);

    let output = Command::new(appforge_bin())
        .args([
            "modify",
            "change the color to green",
            "--offline",
            "--state",
            state.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Modification should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Changed colors to:"));

    let snapshot: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&state).unwrap()).unwrap();
    assert_eq!(snapshot["customizations"]["primaryColor"], "#34C759");
    // The name survives a recolor.
    assert_eq!(snapshot["customizations"]["businessName"], "Tasty Corner");
}

#[test]
fn test_modify_menu_item_and_out_dir() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let state = temp.path().join("app.json");
    let out_dir = temp.path().join("out");
    generate_snapshot(&state);

    let output = Command::new(appforge_bin())
        .args([
            "modify",
            "On the menu, add Garlic Bread for $5.99",
            "--offline",
            "--state",
            state.to_str().unwrap(),
            "--out-dir",
            out_dir.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Added \"Garlic Bread\" to the menu for $5.99"));

    let menu = std::fs::read_to_string(out_dir.join("screens/MenuScreen.js")).unwrap();
    assert!(menu.contains("{ id: 6, name: 'Garlic Bread', price: 5.99"));
}

#[test]
fn test_modify_unrecognized_keeps_files() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let state = temp.path().join("app.json");
    generate_snapshot(&state);
    let before = std::fs::read_to_string(&state).unwrap();
    let before: serde_json::Value = serde_json::from_str(&before).unwrap();

    let output = Command::new(appforge_bin())
        .args([
            "modify",
            "make it better",
            "--offline",
            "--state",
            state.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No specific changes were made"));

    let after: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&state).unwrap()).unwrap();
    assert_eq!(after["files"], before["files"]);
}

#[test]
fn test_modify_missing_snapshot_is_io_error() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let state = temp.path().join("missing.json");

    let output = Command::new(appforge_bin())
        .args([
            "modify",
            "change the color to blue",
            "--offline",
            "--state",
            state.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read snapshot"));
}
