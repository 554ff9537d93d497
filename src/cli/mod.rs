//! CLI command handlers.
//!
//! This module provides headless, scriptable access to the generator's core
//! functionality for automation, testing, and CI integration.

pub mod classify;
pub mod common;
pub mod generate;
pub mod modify;
#[cfg(feature = "web")]
pub mod serve;

// Re-export types used by main.rs and tests
pub use classify::ClassifyArgs;
pub use common::ExitCode;
pub use generate::GenerateArgs;
pub use modify::ModifyArgs;
#[cfg(feature = "web")]
pub use serve::ServeArgs;
