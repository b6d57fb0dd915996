//! Notification collaborator contract
//!
//! Failures surfaced to the user go through this sink; the core never renders
//! them itself.

use serde::{Deserialize, Serialize};

/// Severity of a user-facing notification.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Error,
    Success,
    Info,
}

/// Sink for user-facing notifications, implemented by the embedding UI.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// Sink that forwards notifications to the log, for headless embedders.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Error => log::error!("{message}"),
            NotificationKind::Success | NotificationKind::Info => log::info!("{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&NotificationKind::Error).unwrap(),
            r#""error""#
        );
    }
}
