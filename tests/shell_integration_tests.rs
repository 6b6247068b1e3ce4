//! Integration tests for the full shell orchestration
//!
//! A real ShellController is spawned against recording surface fakes, and
//! state transitions are driven through the store exactly as the application
//! would. Assertions poll until the expected side effect appears, since the
//! manager tasks run concurrently with the test body.

use appshell::models::ShellConfig;
use appshell::services::translation::{TranslationError, Translator};
use appshell::state::{Action, StateManager};
use appshell::ui::surface::{
    DialogHost, Notification, NotificationHost, OverlayHandle, OverlayOptions,
};
use appshell::ui::{ShellController, ShellSurfaces};
use appshell::AudioError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

#[derive(Clone, Debug, PartialEq)]
enum SurfaceEvent {
    OverlayOpened,
    OverlayClosed,
    InstructionsOpened,
    Notified(Notification),
}

/// Records every surface call for later assertions.
#[derive(Clone, Default)]
struct RecordingSurface {
    events: Arc<Mutex<Vec<SurfaceEvent>>>,
}

impl RecordingSurface {
    fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().unwrap().clone()
    }

    fn count(&self, matches: fn(&SurfaceEvent) -> bool) -> usize {
        self.events().iter().filter(|e| matches(e)).count()
    }

    fn notifications(&self) -> Vec<Notification> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SurfaceEvent::Notified(notification) => Some(notification),
                _ => None,
            })
            .collect()
    }
}

struct RecordingHandle {
    events: Arc<Mutex<Vec<SurfaceEvent>>>,
}

impl OverlayHandle for RecordingHandle {
    fn close(self: Box<Self>) {
        self.events.lock().unwrap().push(SurfaceEvent::OverlayClosed);
    }
}

impl DialogHost for RecordingSurface {
    fn open_overlay(&self, _options: OverlayOptions) -> Box<dyn OverlayHandle> {
        self.events.lock().unwrap().push(SurfaceEvent::OverlayOpened);
        Box::new(RecordingHandle {
            events: Arc::clone(&self.events),
        })
    }

    fn open_audio_instructions(&self) {
        self.events
            .lock()
            .unwrap()
            .push(SurfaceEvent::InstructionsOpened);
    }
}

impl NotificationHost for RecordingSurface {
    fn show(&self, notification: Notification) {
        self.events
            .lock()
            .unwrap()
            .push(SurfaceEvent::Notified(notification));
    }
}

/// Map-backed translator that records lookups and can hold each resolution
/// until the test releases the gate.
struct MapTranslator {
    entries: HashMap<String, String>,
    calls: Arc<Mutex<Vec<String>>>,
    gate: Option<Arc<Notify>>,
}

impl MapTranslator {
    fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    fn gated(entries: &[(&str, &str)], gate: Arc<Notify>) -> Self {
        let mut translator = Self::new(entries);
        translator.gate = Some(gate);
        translator
    }

    fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Translator for MapTranslator {
    async fn translate(&self, key: &str) -> Result<String, TranslationError> {
        self.calls.lock().unwrap().push(key.to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| TranslationError::MissingKey {
                key: key.to_string(),
            })
    }
}

fn spawn_shell(
    store: &StateManager,
    surface: &RecordingSurface,
    translator: Arc<dyn Translator>,
) -> ShellController {
    let surfaces = ShellSurfaces {
        dialogs: Arc::new(surface.clone()),
        notifier: Arc::new(surface.clone()),
        translator,
    };
    ShellController::spawn(store.clone(), surfaces, &ShellConfig::default())
}

/// Poll until the condition holds, panicking after two seconds.
async fn eventually(description: &str, condition: impl Fn() -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while !condition() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "timed out waiting for: {}",
            description
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

/// Give the manager tasks a moment, then confirm nothing happened.
async fn settle_and_assert_no_events(surface: &RecordingSurface) {
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(surface.events().is_empty(), "expected no surface activity");
}

#[tokio::test]
async fn test_loading_sequence_opens_once_and_closes_once() {
    let store = StateManager::new();
    let surface = RecordingSurface::default();
    let controller = spawn_shell(&store, &surface, Arc::new(MapTranslator::new(&[])));

    store.dispatch(Action::SetLoading(true));
    store.dispatch(Action::SetLoading(true)); // duplicate, silent
    store.dispatch(Action::SetLoading(false));

    eventually("one open and one close", || {
        surface.count(|e| *e == SurfaceEvent::OverlayOpened) == 1
            && surface.count(|e| *e == SurfaceEvent::OverlayClosed) == 1
    })
    .await;

    controller.shutdown().await;
}

#[tokio::test]
async fn test_overlay_balance_across_repeated_cycles() {
    let store = StateManager::new();
    let surface = RecordingSurface::default();
    let controller = spawn_shell(&store, &surface, Arc::new(MapTranslator::new(&[])));

    for _ in 0..3 {
        store.dispatch(Action::SetLoading(true));
        store.dispatch(Action::SetLoading(false));
    }

    eventually("three balanced open/close cycles", || {
        surface.count(|e| *e == SurfaceEvent::OverlayOpened) == 3
            && surface.count(|e| *e == SurfaceEvent::OverlayClosed) == 3
    })
    .await;

    controller.shutdown().await;
}

#[tokio::test]
async fn test_false_with_no_overlay_produces_no_action() {
    let store = StateManager::new();
    let surface = RecordingSurface::default();
    let controller = spawn_shell(&store, &surface, Arc::new(MapTranslator::new(&[])));

    // Already false; the dispatch is value-unchanged and the manager filter
    // would drop a bare false anyway.
    store.dispatch(Action::SetLoading(false));

    settle_and_assert_no_events(&surface).await;
    controller.shutdown().await;
}

#[tokio::test]
async fn test_error_produces_one_reset_and_one_notification() {
    let store = StateManager::new();
    let surface = RecordingSurface::default();
    let controller = spawn_shell(&store, &surface, Arc::new(MapTranslator::new(&[])));

    store.dispatch(Action::DisplayError("disk full".to_string()));

    eventually("notification shown", || {
        surface.notifications().len() == 1
    })
    .await;

    let notification = surface.notifications().remove(0);
    assert_eq!(notification.message, "disk full");
    assert_eq!(notification.panel_class, "warn");
    assert_eq!(notification.duration, Duration::from_secs(10));

    // The reset already cleared the store's error field.
    assert!(store.read(|s| s.error.is_none()));

    controller.shutdown().await;
}

#[tokio::test]
async fn test_repeated_identical_error_notifies_twice() {
    let store = StateManager::new();
    let surface = RecordingSurface::default();
    let controller = spawn_shell(&store, &surface, Arc::new(MapTranslator::new(&[])));

    store.dispatch(Action::DisplayError("disk full".to_string()));
    eventually("first notification", || surface.notifications().len() == 1).await;
    assert!(store.read(|s| s.error.is_none()));

    store.dispatch(Action::DisplayError("disk full".to_string()));
    eventually("second notification", || surface.notifications().len() == 2).await;
    assert!(store.read(|s| s.error.is_none()));

    let messages: Vec<String> = surface
        .notifications()
        .into_iter()
        .map(|n| n.message)
        .collect();
    assert_eq!(messages, vec!["disk full", "disk full"]);

    controller.shutdown().await;
}

#[tokio::test]
async fn test_empty_error_message_is_ignored() {
    let store = StateManager::new();
    let surface = RecordingSurface::default();
    let controller = spawn_shell(&store, &surface, Arc::new(MapTranslator::new(&[])));

    store.dispatch(Action::DisplayError(String::new()));

    settle_and_assert_no_events(&surface).await;
    controller.shutdown().await;
}

#[tokio::test]
async fn test_missing_speaker_opens_instructions_without_translation() {
    let store = StateManager::new();
    let surface = RecordingSurface::default();
    let translator = MapTranslator::new(&[]);
    let calls = translator.calls();
    let controller = spawn_shell(&store, &surface, Arc::new(translator));

    store.dispatch(Action::RaiseAudioError(AudioError::MissingSpeaker));

    eventually("instructions dialog opened", || {
        surface.count(|e| *e == SurfaceEvent::InstructionsOpened) == 1
    })
    .await;

    assert!(calls.lock().unwrap().is_empty(), "no translation expected");
    assert!(surface.notifications().is_empty());
    assert!(store.read(|s| s.error.is_none()));

    controller.shutdown().await;
}

#[tokio::test]
async fn test_generic_code_notifies_only_after_translation_resolves() {
    let store = StateManager::new();
    let surface = RecordingSurface::default();
    let gate = Arc::new(Notify::new());
    let translator = MapTranslator::gated(
        &[("audio.errors.unknownBuffer", "Playback buffer under-run")],
        Arc::clone(&gate),
    );
    let calls = translator.calls();
    let controller = spawn_shell(&store, &surface, Arc::new(translator));

    store.dispatch(Action::RaiseAudioError(AudioError::from_code(
        "unknownBuffer",
    )));

    eventually("translation lookup issued", || {
        *calls.lock().unwrap() == ["audio.errors.unknownBuffer"]
    })
    .await;

    // Still suspended on the lookup: nothing surfaced yet.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(surface.notifications().is_empty());
    assert!(store.read(|s| s.error.is_none()));

    gate.notify_one();

    eventually("translated message surfaced", || {
        surface
            .notifications()
            .iter()
            .any(|n| n.message == "Playback buffer under-run")
    })
    .await;

    controller.shutdown().await;
}

#[tokio::test]
async fn test_translation_failure_surfaces_fallback_key() {
    let store = StateManager::new();
    let surface = RecordingSurface::default();
    let controller = spawn_shell(&store, &surface, Arc::new(MapTranslator::new(&[])));

    store.dispatch(Action::RaiseAudioError(AudioError::from_code("badCode")));

    eventually("fallback notification", || {
        surface
            .notifications()
            .iter()
            .any(|n| n.message == "audio.errors.badCode")
    })
    .await;

    controller.shutdown().await;
}

#[tokio::test]
async fn test_audio_errors_are_processed_in_emission_order() {
    let store = StateManager::new();
    let surface = RecordingSurface::default();
    let translator = MapTranslator::new(&[
        ("audio.errors.deviceBusy", "Device busy"),
        ("audio.errors.recordingFailed", "Recording failed"),
    ]);
    let controller = spawn_shell(&store, &surface, Arc::new(translator));

    store.dispatch(Action::RaiseAudioError(AudioError::from_code("deviceBusy")));
    store.dispatch(Action::RaiseAudioError(AudioError::from_code(
        "recordingFailed",
    )));

    eventually("both messages surfaced", || surface.notifications().len() == 2).await;

    let messages: Vec<String> = surface
        .notifications()
        .into_iter()
        .map(|n| n.message)
        .collect();
    assert_eq!(messages, vec!["Device busy", "Recording failed"]);

    controller.shutdown().await;
}

#[tokio::test]
async fn test_shutdown_tears_down_all_subscriptions() {
    let store = StateManager::new();
    let surface = RecordingSurface::default();
    let controller = spawn_shell(&store, &surface, Arc::new(MapTranslator::new(&[])));
    assert_eq!(controller.task_count(), 3);

    controller.shutdown().await;

    store.dispatch(Action::SetLoading(true));
    store.dispatch(Action::DisplayError("disk full".to_string()));

    settle_and_assert_no_events(&surface).await;
}
