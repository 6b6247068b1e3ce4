// Appshell - reactive shell orchestration
//
// This is the library crate containing the state store, the stream adapter
// and the three shell managers. The binary crate (main.rs) provides a
// headless entry point driven from stdin.

pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod state;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{AppState, AudioError, ShellConfig};
pub use services::{CatalogTranslator, TranslationError, Translator};
pub use state::{Action, Selection, StateChange, StateManager};
pub use ui::{HeadlessSurface, ShellController, ShellSurfaces};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
