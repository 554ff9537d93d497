//! Data models for generated applications, customizations, and templates.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of the web and CLI
//! layers.

pub mod app;
pub mod color;
pub mod customization;
pub mod template;

// Re-export all model types
pub use app::{GeneratedApp, GeneratedTemplate, ModificationResult};
pub use color::ThemeColor;
pub use customization::CustomizationRecord;
pub use template::TemplateCategory;
