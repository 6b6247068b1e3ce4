// LoadingOverlayManager - owns the lifecycle of the single busy indicator.
//
// Strictly two states: Closed (no handle) and Open (exactly one handle).
// Transitions follow the loading flag; everything else is filtered out so a
// close can never be attempted while no overlay is live.

use crate::metrics::shell_metrics;
use crate::state::Selection;
use crate::ui::surface::{DialogHost, OverlayHandle, OverlayOptions};
use std::sync::Arc;

/// Reacts to the loading flag by opening and closing the modal busy overlay.
///
/// The manager holds the only [`OverlayHandle`] in the process. The filter in
/// [`on_value`](Self::on_value) ignores a `false` flag while no overlay is
/// open, which is what makes a close-on-nothing structurally impossible.
pub struct LoadingOverlayManager {
    dialogs: Arc<dyn DialogHost>,
    options: OverlayOptions,
    overlay: Option<Box<dyn OverlayHandle>>,
}

impl LoadingOverlayManager {
    pub fn new(dialogs: Arc<dyn DialogHost>, options: OverlayOptions) -> Self {
        Self {
            dialogs,
            options,
            overlay: None,
        }
    }

    /// Consume the loading stream until the store goes away.
    pub async fn run(mut self, mut loading: Selection<bool>) {
        tracing::debug!("loading overlay manager started");

        while let Some(is_loading) = loading.next().await {
            self.on_value(is_loading);
        }

        tracing::debug!("loading overlay manager stopped");
    }

    /// Handle one observed loading value.
    pub fn on_value(&mut self, is_loading: bool) {
        // Only react when turning on, or when an overlay is live.
        if !is_loading && self.overlay.is_none() {
            return;
        }

        if is_loading {
            if self.overlay.is_some() {
                tracing::trace!("overlay already open, ignoring duplicate loading=true");
                return;
            }
            tracing::debug!("opening loading overlay");
            self.overlay = Some(self.dialogs.open_overlay(self.options.clone()));
            shell_metrics().record_overlay_opened();
        } else {
            match self.overlay.take() {
                Some(handle) => {
                    tracing::debug!("closing loading overlay");
                    handle.close();
                    shell_metrics().record_overlay_closed();
                }
                None => {
                    // Unreachable given the filter above; reported, not retried.
                    shell_metrics().record_invariant_violation();
                    tracing::error!("overlay close requested but no handle is live");
                }
            }
        }
    }

    /// True while an overlay handle is live.
    pub fn is_open(&self) -> bool {
        self.overlay.is_some()
    }
}
