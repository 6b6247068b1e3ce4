// ShellController - wires the three managers to the state store.
//
// It obtains each manager's typed Selection before spawning anything, so no
// dispatch issued after construction can be missed, and it keeps the spawned
// join handles in an owned collection for uniform teardown at shutdown.

use crate::models::ShellConfig;
use crate::services::translation::Translator;
use crate::state::StateManager;
use crate::ui::audio::AudioErrorDialogManager;
use crate::ui::notify::ErrorNotificationManager;
use crate::ui::overlay::LoadingOverlayManager;
use crate::ui::surface::{DialogHost, NotificationHost, OverlayOptions};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// The collaborator set the shell drives: modal surfaces, the notification
/// channel, and the translation service.
#[derive(Clone)]
pub struct ShellSurfaces {
    pub dialogs: Arc<dyn DialogHost>,
    pub notifier: Arc<dyn NotificationHost>,
    pub translator: Arc<dyn Translator>,
}

/// Owns the three manager tasks for the lifetime of the application.
///
/// # Example
/// ```ignore
/// let controller = ShellController::spawn(store.clone(), surfaces, &config);
/// // ... application runs ...
/// controller.shutdown().await;
/// ```
pub struct ShellController {
    tasks: Vec<JoinHandle<()>>,
}

impl ShellController {
    /// Subscribe the three managers and spawn one task per manager.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(store: StateManager, surfaces: ShellSurfaces, config: &ShellConfig) -> Self {
        let overlay_manager = LoadingOverlayManager::new(
            Arc::clone(&surfaces.dialogs),
            OverlayOptions {
                panel_class: config.overlay.panel_class.clone(),
            },
        );
        let loading = store.select_loading();

        let notification_manager = ErrorNotificationManager::new(
            store.clone(),
            Arc::clone(&surfaces.notifier),
            &config.notification,
        );
        let errors = store.select_app_error();

        let audio_manager = AudioErrorDialogManager::new(
            store.clone(),
            Arc::clone(&surfaces.dialogs),
            Arc::clone(&surfaces.translator),
        );
        let audio_errors = store.select_audio_error();

        let tasks = vec![
            tokio::spawn(overlay_manager.run(loading)),
            tokio::spawn(notification_manager.run(errors)),
            tokio::spawn(audio_manager.run(audio_errors)),
        ];

        tracing::info!("shell controller started ({} manager tasks)", tasks.len());
        Self { tasks }
    }

    /// Number of live manager tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Tear down all manager subscriptions and wait for the tasks to finish.
    pub async fn shutdown(self) {
        for task in &self.tasks {
            task.abort();
        }
        for task in self.tasks {
            // Cancellation surfaces as a JoinError; nothing to do with it.
            let _ = task.await;
        }

        tracing::info!("shell controller stopped");
    }
}
