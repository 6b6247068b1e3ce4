/// Error code reported by the audio subsystem.
///
/// The only code with dedicated handling is [`AudioError::MissingSpeaker`],
/// which opens an instructional dialog instead of a notification. Every other
/// code is carried verbatim in [`AudioError::Code`] and resolved through the
/// translation catalog under the `audio.errors.` namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AudioError {
    /// No output device available; the user gets step-by-step instructions.
    MissingSpeaker,
    /// Any other audio error code, displayed via a translated generic message.
    Code(String),
}

impl AudioError {
    /// Build an error from the raw code reported by the audio layer.
    pub fn from_code(code: &str) -> Self {
        match code {
            "missingSpeaker" => AudioError::MissingSpeaker,
            other => AudioError::Code(other.to_string()),
        }
    }

    /// The raw code string, as reported by the audio layer.
    pub fn code(&self) -> &str {
        match self {
            AudioError::MissingSpeaker => "missingSpeaker",
            AudioError::Code(code) => code,
        }
    }

    /// Catalog key used to resolve the user-facing message for this code.
    pub fn translation_key(&self) -> String {
        format!("audio.errors.{}", self.code())
    }
}

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Single source of truth for the shell-relevant application state.
///
/// # Thread Safety
///
/// `AppState` is wrapped in `Arc<RwLock<AppState>>` by
/// [`crate::state::StateManager`]. Never mutate it directly - all writes go
/// through [`StateManager::dispatch`](crate::state::StateManager::dispatch)
/// so that change events stay consistent with the stored values.
///
/// # Related Types
///
/// - [`crate::state::StateManager`]: Thread-safe wrapper with event emission
/// - [`crate::state::StateChange`]: Per-field change events
/// - [`crate::state::Action`]: The command set that mutates this state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    /// Whether a long-running operation is in flight. Drives the loading
    /// overlay: overlay-open if and only if the last observed value is true.
    pub is_loading: bool,

    /// Pending application error message. Set by producers via
    /// `Action::DisplayError`, consumed exactly once by the notification
    /// manager, then reset to `None`.
    pub error: Option<String>,

    /// Pending audio error code. Read-only to the shell managers.
    pub audio_error: Option<AudioError>,
}

impl AppState {
    /// True when an application error is pending consumption.
    pub fn has_error(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.is_empty())
    }
}
