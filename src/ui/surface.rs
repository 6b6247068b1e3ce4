// Surface traits - the shell's outward-facing collaborator interfaces.
//
// The orchestrator never renders anything itself. Overlays, dialogs and
// notifications are drawn by whatever subsystem implements these traits; the
// shell only drives their lifecycles. See headless.rs for the tracing-backed
// implementation used by the binary.

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

/// Options passed when opening the loading overlay. The panel class is an
/// opaque styling tag, forwarded untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayOptions {
    pub panel_class: String,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            panel_class: "app-loader".to_string(),
        }
    }
}

/// A timed, non-blocking message surfaced to the user. Ephemeral value
/// object; the host owns display and auto-dismissal.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub message: String,
    pub panel_class: String,
    pub duration: Duration,
}

/// Exclusive handle to an open overlay. Closing consumes the handle, so a
/// closed overlay cannot be closed twice by construction.
pub trait OverlayHandle: Send {
    fn close(self: Box<Self>);
}

/// Modal surface host: the loading overlay and the audio instructions dialog.
#[cfg_attr(test, automock)]
pub trait DialogHost: Send + Sync {
    /// Open the blocking busy indicator. The returned handle is the only way
    /// to close it.
    fn open_overlay(&self, options: OverlayOptions) -> Box<dyn OverlayHandle>;

    /// Open the audio instructions dialog. Dismissal is handled entirely by
    /// the dialog subsystem, so no handle is returned.
    fn open_audio_instructions(&self);
}

/// Notification channel host.
#[cfg_attr(test, automock)]
pub trait NotificationHost: Send + Sync {
    fn show(&self, notification: Notification);
}
