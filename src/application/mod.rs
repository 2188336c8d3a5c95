//! Application layer - the session authority and the toast slot.

mod notifier;
mod session_manager;

pub use notifier::{Toast, ToastNotifier, ToastSeverity, DEFAULT_TOAST_DURATION};
pub use session_manager::SessionManager;
