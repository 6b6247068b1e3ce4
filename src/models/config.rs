use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shell configuration from appshell.yaml
///
/// Styling tags and timings for the UI surfaces, the translation catalog
/// location, and logging preferences. All sections fall back to defaults when
/// absent, so a missing or partial file is never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    pub overlay: OverlaySettings,
    pub notification: NotificationSettings,
    pub translation: TranslationSettings,
    pub logging: LoggingSettings,
}

/// Styling for the loading overlay. The panel class is an opaque tag passed
/// through to the dialog subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverlaySettings {
    pub panel_class: String,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            panel_class: "app-loader".to_string(),
        }
    }
}

/// Styling and timing for error notifications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NotificationSettings {
    pub panel_class: String,

    /// How long a notification stays on screen, in milliseconds.
    pub duration_ms: u64,
}

impl NotificationSettings {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            panel_class: "warn".to_string(),
            duration_ms: 10_000,
        }
    }
}

/// Where to find the translation catalog. `None` selects the built-in
/// default catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TranslationSettings {
    pub catalog: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    pub dir: String,
    pub prefix: String,
    pub debug: bool,
    pub console: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            dir: "logs".to_string(),
            prefix: "appshell".to_string(),
            debug: false,
            console: true,
        }
    }
}
