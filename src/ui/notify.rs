// ErrorNotificationManager - consumes application error messages.
//
// Each non-empty message is consumed exactly once: the store's error field is
// reset first, then the notification is shown. Resetting before display is
// what allows an identical message assigned later to surface again.

use crate::metrics::shell_metrics;
use crate::models::NotificationSettings;
use crate::state::{Action, Selection, StateManager};
use crate::ui::surface::{Notification, NotificationHost};
use std::sync::Arc;
use std::time::Duration;

/// Turns application error values into timed warning notifications.
pub struct ErrorNotificationManager {
    store: StateManager,
    notifier: Arc<dyn NotificationHost>,
    panel_class: String,
    duration: Duration,
}

impl ErrorNotificationManager {
    pub fn new(
        store: StateManager,
        notifier: Arc<dyn NotificationHost>,
        settings: &NotificationSettings,
    ) -> Self {
        Self {
            store,
            notifier,
            panel_class: settings.panel_class.clone(),
            duration: settings.duration(),
        }
    }

    /// Consume the error stream until the store goes away.
    pub async fn run(self, mut errors: Selection<Option<String>>) {
        tracing::debug!("error notification manager started");

        while let Some(value) = errors.next().await {
            let Some(message) = value.filter(|m| !m.is_empty()) else {
                continue;
            };
            self.on_error(message);
        }

        tracing::debug!("error notification manager stopped");
    }

    /// Handle one non-empty error message.
    pub fn on_error(&self, message: String) {
        tracing::debug!("surfacing error notification: {}", message);

        // Reset must precede display so the same message can be raised again
        // by a later assignment without being swallowed.
        self.store.dispatch(Action::ResetError);

        self.notifier.show(Notification {
            message,
            panel_class: self.panel_class.clone(),
            duration: self.duration,
        });
        shell_metrics().record_notification_shown();
    }
}
