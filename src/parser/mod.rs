//! Free-text request parsing: customization extraction and intent
//! classification.

pub mod customization;
pub mod intent;

pub use customization::{extract_customizations, COLOR_PALETTE};
pub use intent::{classify, classify_local, Classification};
