//! Toast notifier - process-wide ephemeral message queue of depth 1.
//!
//! A new message replaces the current one and reschedules the single
//! auto-dismiss timer. Timers are generation-counted: a timer that fires
//! after its message was replaced or dismissed finds a newer generation and
//! does nothing, so at most one pending dismiss is ever effective.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;

/// How long a toast stays up unless replaced or dismissed.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

/// Message severity, mirrored into API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastSeverity {
    Success,
    Error,
    Info,
    Warning,
}

/// A single ephemeral message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub message: String,
    pub severity: ToastSeverity,
}

#[derive(Default)]
struct ToastSlot {
    current: Option<Toast>,
    generation: u64,
}

/// Cloneable handle to the process-wide toast slot.
#[derive(Clone, Default)]
pub struct ToastNotifier {
    slot: Arc<Mutex<ToastSlot>>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a message with the default duration.
    pub fn show(&self, message: impl Into<String>, severity: ToastSeverity) {
        self.show_for(message, severity, DEFAULT_TOAST_DURATION);
    }

    /// Shows a message, replacing the current one and rescheduling the
    /// auto-dismiss timer.
    pub fn show_for(&self, message: impl Into<String>, severity: ToastSeverity, duration: Duration) {
        let generation = {
            let mut slot = self.slot.lock().expect("toast slot poisoned");
            slot.generation += 1;
            slot.current = Some(Toast {
                message: message.into(),
                severity,
            });
            slot.generation
        };

        let slot = Arc::clone(&self.slot);
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut slot = slot.lock().expect("toast slot poisoned");
            // A newer show/dismiss supersedes this timer.
            if slot.generation == generation {
                slot.current = None;
            }
        });
    }

    pub fn current(&self) -> Option<Toast> {
        self.slot.lock().expect("toast slot poisoned").current.clone()
    }

    /// Dismisses the current message and invalidates any pending timer.
    pub fn dismiss(&self) {
        let mut slot = self.slot.lock().expect("toast slot poisoned");
        slot.generation += 1;
        slot.current = None;
    }
}
