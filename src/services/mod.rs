//! Services module - collaborator-facing logic with no UI dependencies.
//!
//! Currently a single service: [`translation`], the key-to-text resolution
//! used by the audio error pathway. Services are framework-agnostic and have
//! no dependency on the shell managers, making them testable in isolation.

pub mod translation;

pub use translation::{CatalogTranslator, TranslationError, Translator};
