//! Shared CLI error handling and helpers.

use crate::completion::{CompletionClient, OpenAiClient};
use crate::config::Config;
use crate::generator::Generator;
use crate::models::GeneratedApp;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,
    /// Invalid arguments or input.
    ValidationError = 2,
    /// Filesystem or network failure.
    IoError = 3,
}

/// A CLI-level error with an associated exit code.
#[derive(Debug)]
pub struct CliError {
    code: ExitCode,
    message: String,
}

impl CliError {
    /// Creates a validation error (exit code 2).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 3).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// The process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.code as i32
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Writes a generated file set under `out_dir`, creating subdirectories as
/// needed. Relative paths in the file map become paths under `out_dir`.
pub fn write_files(out_dir: &Path, files: &BTreeMap<String, String>) -> CliResult<()> {
    for (relative, content) in files {
        let target = out_dir.join(relative);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CliError::io(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
        std::fs::write(&target, content)
            .map_err(|e| CliError::io(format!("Failed to write {}: {e}", target.display())))?;
    }
    Ok(())
}

/// Builds the orchestrator from the loaded configuration.
///
/// With `offline` set (or no API key in the environment) the generator runs
/// without a completion client and classification stays local.
pub fn build_generator(offline: bool) -> CliResult<Generator> {
    let config = Config::load().map_err(|e| CliError::validation(format!("{e:#}")))?;

    let client: Option<Box<dyn CompletionClient>> = if offline {
        None
    } else {
        OpenAiClient::from_env(config.completion.settings(), &config.completion.api_key_env)
            .map_err(|e| CliError::io(format!("Failed to create completion client: {e:#}")))?
            .map(|c| Box::new(c) as Box<dyn CompletionClient>)
    };

    Ok(Generator::new(client))
}

/// Loads an app snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> CliResult<GeneratedApp> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read snapshot {}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| CliError::validation(format!("Invalid snapshot {}: {e}", path.display())))
}

/// Saves an app snapshot as pretty-printed JSON.
pub fn save_snapshot(path: &Path, app: &GeneratedApp) -> CliResult<()> {
    let content = serde_json::to_string_pretty(app)
        .map_err(|e| CliError::io(format!("Failed to serialize snapshot: {e}")))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CliError::io(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }
    std::fs::write(path, content)
        .map_err(|e| CliError::io(format!("Failed to write snapshot {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code(), 2);
        assert_eq!(CliError::io("broken").exit_code(), 3);
    }

    #[test]
    fn test_snapshot_round_trip() {
        use crate::models::{CustomizationRecord, TemplateCategory};
        use crate::templates;
        use chrono::Utc;

        let customizations = CustomizationRecord::default();
        let template = templates::generate(TemplateCategory::Business, &customizations);
        let app = GeneratedApp {
            app_name: customizations.app_identifier(),
            template: TemplateCategory::Business,
            template_name: template.name,
            features: template.features,
            files: template.files,
            customizations,
            generated_at: Utc::now(),
        };

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state").join("app.json");
        save_snapshot(&path, &app).unwrap();
        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded, app);
    }

    #[test]
    fn test_write_files_creates_subdirectories() {
        let temp = TempDir::new().unwrap();
        let mut files = BTreeMap::new();
        files.insert("App.js".to_string(), "app".to_string());
        files.insert("screens/MenuScreen.js".to_string(), "menu".to_string());

        write_files(temp.path(), &files).unwrap();
        assert_eq!(
            std::fs::read_to_string(temp.path().join("App.js")).unwrap(),
            "app"
        );
        assert_eq!(
            std::fs::read_to_string(temp.path().join("screens/MenuScreen.js")).unwrap(),
            "menu"
        );
    }
}
