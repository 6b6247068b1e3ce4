//! Data models for the appshell orchestrator.
//!
//! - [`AppState`]: the central state container the shell reacts to
//! - [`AudioError`]: the closed set of audio error codes
//! - [`ShellConfig`]: styling, timing, translation and logging settings
//!   loaded from `appshell.yaml`
//!
//! # Architecture Note
//!
//! `AppState` is wrapped in `Arc<RwLock<>>` by
//! [`StateManager`](crate::state::StateManager); the config structs derive
//! `Serialize`/`Deserialize` for YAML persistence and default field-by-field
//! so partial files load cleanly.

pub mod app_state;
pub mod config;

pub use app_state::{AppState, AudioError};
pub use config::{LoggingSettings, NotificationSettings, OverlaySettings, ShellConfig, TranslationSettings};
