// State management module
//
// Provides the StateManager which wraps AppState with thread-safe access
// using Arc<RwLock<T>> and emits per-field change events over a tokio
// broadcast channel. The select submodule derives the typed read streams the
// shell managers subscribe to.

use crate::metrics::shell_metrics;
use crate::models::{AppState, AudioError};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

pub mod select;

pub use select::Selection;

/// Change events emitted when a state field is modified.
///
/// One event per changed field, carrying the new value. Events are only
/// emitted when the value actually changed, so re-assigning an identical
/// value is silent.
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    /// The loading flag flipped.
    LoadingChanged { is_loading: bool },

    /// The application error message was set or reset.
    AppErrorChanged { error: Option<String> },

    /// The audio error code was set or cleared.
    AudioErrorChanged { error: Option<AudioError> },
}

/// The command set that mutates [`AppState`].
///
/// Dispatching an action is the only write path into the store; the shell
/// managers themselves never touch state fields directly.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Flip the loading flag.
    SetLoading(bool),

    /// Surface an error message to the user.
    DisplayError(String),

    /// Clear the pending error message after consumption.
    ResetError,

    /// Report an audio error code.
    RaiseAudioError(AudioError),

    /// Clear the pending audio error code.
    ClearAudioError,
}

/// Thread-safe state store with change-event emission.
///
/// This is the central state component that:
/// - Provides thread-safe access to [`AppState`] via `Arc<RwLock<T>>`
/// - Detects state changes and emits [`StateChange`] events
/// - Exposes typed read streams via [`select_loading`](Self::select_loading),
///   [`select_app_error`](Self::select_app_error) and
///   [`select_audio_error`](Self::select_audio_error)
///
/// # Usage
///
/// Reads go through [`read()`](Self::read) or [`snapshot()`](Self::snapshot);
/// writes go through [`dispatch()`](Self::dispatch). Clones share the same
/// state and broadcast channel.
///
/// # Related Types
///
/// - [`crate::models::AppState`]: The underlying state structure
/// - [`StateChange`]: Event types emitted on state mutations
/// - [`crate::ui::ShellController`]: Primary consumer of the change streams
pub struct StateManager {
    /// The application state protected by RwLock for thread-safe access
    state: Arc<RwLock<AppState>>,

    /// Broadcast channel for emitting state change events
    /// Multiple subscribers can listen for state changes
    state_tx: broadcast::Sender<StateChange>,
}

impl StateManager {
    /// Create a new StateManager with default state and a broadcast buffer
    /// of 100 events.
    pub fn new() -> Self {
        let (state_tx, _) = broadcast::channel(100);
        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            state_tx,
        }
    }

    /// Get a read-only snapshot of the current state.
    pub fn snapshot(&self) -> AppState {
        self.state.read().unwrap().clone()
    }

    /// Execute a function with read access to the state.
    ///
    /// # Example
    /// ```ignore
    /// let is_loading = store.read(|state| state.is_loading);
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppState) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Apply a state command and emit change events.
    ///
    /// The write path of the store. Fire-and-forget: callers do not need to
    /// consult the returned change list, it exists for tests and logging.
    pub fn dispatch(&self, action: Action) -> Vec<StateChange> {
        tracing::trace!("dispatching {:?}", action);
        match action {
            Action::SetLoading(is_loading) => self.update(|state| {
                state.is_loading = is_loading;
            }),
            Action::DisplayError(message) => self.update(|state| {
                state.error = Some(message);
            }),
            Action::ResetError => self.update(|state| {
                state.error = None;
            }),
            Action::RaiseAudioError(error) => self.update(|state| {
                state.audio_error = Some(error);
            }),
            Action::ClearAudioError => self.update(|state| {
                state.audio_error = None;
            }),
        }
    }

    /// Update the state and emit change events.
    ///
    /// Captures the old state, applies the update function, diffs the two
    /// and broadcasts one event per changed field.
    ///
    /// # Returns
    /// The StateChange events that were emitted
    pub fn update<F>(&self, update_fn: F) -> Vec<StateChange>
    where
        F: FnOnce(&mut AppState),
    {
        let mut state = self.state.write().unwrap();
        let old_state = state.clone();

        update_fn(&mut state);
        shell_metrics().record_state_update();

        let changes = Self::detect_changes(&old_state, &state);

        for change in &changes {
            // Ignore send errors - it's OK if no one is listening
            match self.state_tx.send(change.clone()) {
                Ok(_) => shell_metrics().record_state_broadcast(),
                Err(_) => shell_metrics().record_broadcast_error(),
            }
        }

        changes
    }

    /// Subscribe to the raw state change feed.
    ///
    /// Shell managers use the typed `select_*` streams instead; the raw feed
    /// is useful for diagnostics and tests.
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.state_tx.subscribe()
    }

    /// Diff two states and generate one event per changed field.
    fn detect_changes(old: &AppState, new: &AppState) -> Vec<StateChange> {
        let mut changes = Vec::new();

        if old.is_loading != new.is_loading {
            changes.push(StateChange::LoadingChanged {
                is_loading: new.is_loading,
            });
        }

        if old.error != new.error {
            changes.push(StateChange::AppErrorChanged {
                error: new.error.clone(),
            });
        }

        if old.audio_error != new.audio_error {
            changes.push(StateChange::AudioErrorChanged {
                error: new.audio_error.clone(),
            });
        }

        changes
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

// Clones share state and channel so the store can be handed to each manager.
impl Clone for StateManager {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            state_tx: self.state_tx.clone(),
        }
    }
}
