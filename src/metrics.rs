// Shell metrics module
//
// Lightweight lock-free counters for monitoring the orchestration layer.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Counters for the shell orchestration layer.
///
/// Uses atomic operations for thread-safe tracking without locks. Collected
/// for the process lifetime and logged on shutdown via
/// [`log_summary`](Self::log_summary).
#[derive(Debug)]
pub struct ShellMetrics {
    /// Number of state updates applied through the store
    pub state_updates: AtomicU64,

    /// Number of state change events broadcast to subscribers
    pub state_broadcasts: AtomicU64,

    /// Number of broadcast sends with no live subscriber
    pub broadcast_errors: AtomicU64,

    /// Loading overlays opened
    pub overlays_opened: AtomicU64,

    /// Loading overlays closed
    pub overlays_closed: AtomicU64,

    /// Error notifications shown
    pub notifications_shown: AtomicU64,

    /// Audio instruction dialogs opened
    pub instruction_dialogs_opened: AtomicU64,

    /// Translation lookups that resolved
    pub translations_resolved: AtomicU64,

    /// Translation lookups that failed and fell back to the raw key
    pub translations_failed: AtomicU64,

    /// UI-consistency invariant violations (should stay at zero)
    pub invariant_violations: AtomicU64,

    /// Process start time
    start_time: Instant,
}

impl ShellMetrics {
    pub fn new() -> Self {
        Self {
            state_updates: AtomicU64::new(0),
            state_broadcasts: AtomicU64::new(0),
            broadcast_errors: AtomicU64::new(0),
            overlays_opened: AtomicU64::new(0),
            overlays_closed: AtomicU64::new(0),
            notifications_shown: AtomicU64::new(0),
            instruction_dialogs_opened: AtomicU64::new(0),
            translations_resolved: AtomicU64::new(0),
            translations_failed: AtomicU64::new(0),
            invariant_violations: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_state_update(&self) {
        self.state_updates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_state_broadcast(&self) {
        self.state_broadcasts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_broadcast_error(&self) {
        self.broadcast_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_overlay_opened(&self) {
        self.overlays_opened.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_overlay_closed(&self) {
        self.overlays_closed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_notification_shown(&self) {
        self.notifications_shown.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_instruction_dialog_opened(&self) {
        self.instruction_dialogs_opened.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_translation_resolved(&self) {
        self.translations_resolved.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_translation_failed(&self) {
        self.translations_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_invariant_violation(&self) {
        self.invariant_violations.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total uptime
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        tracing::info!("=== Shell Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "State: {} updates, {} broadcasts, {} unobserved",
            self.state_updates.load(Ordering::Relaxed),
            self.state_broadcasts.load(Ordering::Relaxed),
            self.broadcast_errors.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Overlays: {} opened, {} closed",
            self.overlays_opened.load(Ordering::Relaxed),
            self.overlays_closed.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Notifications: {}, instruction dialogs: {}",
            self.notifications_shown.load(Ordering::Relaxed),
            self.instruction_dialogs_opened.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Translations: {} resolved, {} failed",
            self.translations_resolved.load(Ordering::Relaxed),
            self.translations_failed.load(Ordering::Relaxed)
        );

        let violations = self.invariant_violations.load(Ordering::Relaxed);
        if violations > 0 {
            tracing::error!("Invariant violations: {}", violations);
        }
    }
}

impl Default for ShellMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide metrics instance.
pub fn shell_metrics() -> &'static ShellMetrics {
    static METRICS: OnceLock<ShellMetrics> = OnceLock::new();
    METRICS.get_or_init(ShellMetrics::new)
}
