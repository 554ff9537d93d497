//! App generator library.
//!
//! Turns natural-language descriptions into complete React Native app
//! sources, and applies free-text modification requests to previously
//! generated apps. The pipeline is: customization extraction, intent
//! classification (optionally delegated to a chat-completion service),
//! template rendering, and keyword-dispatched modification.

// Module declarations
pub mod cli;
pub mod completion;
pub mod config;
pub mod constants;
pub mod generator;
pub mod models;
pub mod modify;
pub mod parser;
pub mod templates;
#[cfg(feature = "web")]
pub mod web;
