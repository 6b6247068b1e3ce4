// Typed read streams over the state change feed.
//
// Each Selection projects one AppState field out of the broadcast feed,
// dropping events for other fields. Managers own exactly one Selection each
// and drive it with `next().await` in their run loop.

use super::{StateChange, StateManager};
use crate::models::{AppState, AudioError};
use tokio::sync::broadcast;

/// A typed, filtered view of the store's change feed.
///
/// Holds its own broadcast receiver, so values dispatched after the
/// `Selection` is created are never missed, and a clone of the store for
/// snapshot resynchronization when the receiver lags.
pub struct Selection<T> {
    store: StateManager,
    rx: broadcast::Receiver<StateChange>,
    from_change: fn(&StateChange) -> Option<T>,
    from_state: fn(&AppState) -> T,
}

impl<T: Clone> Selection<T> {
    /// Wait for the next value of the selected field.
    ///
    /// Events for other fields are skipped. If the receiver lagged behind the
    /// broadcast buffer, the current snapshot value is returned instead so a
    /// missed terminal transition cannot strand a manager in a stale state.
    /// Returns `None` once the store side of the channel is gone.
    pub async fn next(&mut self) -> Option<T> {
        loop {
            match self.rx.recv().await {
                Ok(change) => {
                    if let Some(value) = (self.from_change)(&change) {
                        return Some(value);
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        "state selection lagged by {} events - resyncing from snapshot",
                        skipped
                    );
                    return Some(self.store.read(self.from_state));
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

impl StateManager {
    /// Read stream of the loading flag.
    pub fn select_loading(&self) -> Selection<bool> {
        Selection {
            store: self.clone(),
            rx: self.subscribe(),
            from_change: |change| match change {
                StateChange::LoadingChanged { is_loading } => Some(*is_loading),
                _ => None,
            },
            from_state: |state| state.is_loading,
        }
    }

    /// Read stream of the application error message.
    pub fn select_app_error(&self) -> Selection<Option<String>> {
        Selection {
            store: self.clone(),
            rx: self.subscribe(),
            from_change: |change| match change {
                StateChange::AppErrorChanged { error } => Some(error.clone()),
                _ => None,
            },
            from_state: |state| state.error.clone(),
        }
    }

    /// Read stream of the audio error code.
    pub fn select_audio_error(&self) -> Selection<Option<AudioError>> {
        Selection {
            store: self.clone(),
            rx: self.subscribe(),
            from_change: |change| match change {
                StateChange::AudioErrorChanged { error } => Some(error.clone()),
                _ => None,
            },
            from_state: |state| state.audio_error.clone(),
        }
    }
}
