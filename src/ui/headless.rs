// Headless surface - tracing-backed hosts for running without a UI toolkit.
//
// Overlays, dialogs and notifications become log lines; live overlay count is
// tracked so callers can observe the open/close balance.

use crate::ui::surface::{
    DialogHost, Notification, NotificationHost, OverlayHandle, OverlayOptions,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Surface implementation that renders everything to the log.
///
/// Implements both host traits, so one instance can serve as the complete
/// surface set for the binary and for tests that only care about counts.
#[derive(Clone, Default)]
pub struct HeadlessSurface {
    live_overlays: Arc<AtomicUsize>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently open overlays (0 or 1 in correct operation).
    pub fn live_overlays(&self) -> usize {
        self.live_overlays.load(Ordering::SeqCst)
    }
}

struct HeadlessOverlayHandle {
    live: Arc<AtomicUsize>,
}

impl OverlayHandle for HeadlessOverlayHandle {
    fn close(self: Box<Self>) {
        self.live.fetch_sub(1, Ordering::SeqCst);
        tracing::info!("[overlay] closed");
    }
}

impl DialogHost for HeadlessSurface {
    fn open_overlay(&self, options: OverlayOptions) -> Box<dyn OverlayHandle> {
        self.live_overlays.fetch_add(1, Ordering::SeqCst);
        tracing::info!("[overlay] opened (panel_class={})", options.panel_class);
        Box::new(HeadlessOverlayHandle {
            live: Arc::clone(&self.live_overlays),
        })
    }

    fn open_audio_instructions(&self) {
        tracing::info!("[dialog] audio instructions opened");
    }
}

impl NotificationHost for HeadlessSurface {
    fn show(&self, notification: Notification) {
        tracing::info!(
            "[notification] {} (panel_class={}, duration={}ms)",
            notification.message,
            notification.panel_class,
            notification.duration.as_millis()
        );
    }
}
