//! User-facing notifications
//!
//! Rendering belongs to the calling layer. Here a notification is only
//! recorded in the log stream, at a tracing level matching its severity.

use edgeshield_domain::NotifyLevel;
use tracing::{error, info, warn};

/// Record a notification for the calling layer to surface
pub fn notify(message: &str, level: NotifyLevel) {
    match level {
        NotifyLevel::Error => {
            error!(target: "edgeshield::notify", notify_level = %level, "{message}");
        }
        NotifyLevel::Warning => {
            warn!(target: "edgeshield::notify", notify_level = %level, "{message}");
        }
        NotifyLevel::Info | NotifyLevel::Success => {
            info!(target: "edgeshield::notify", notify_level = %level, "{message}");
        }
    }
}

/// [`notify`] at the default `info` level
pub fn notify_info(message: &str) {
    notify(message, NotifyLevel::default());
}
