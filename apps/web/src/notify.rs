//! Toast notifications — the sink the analyze trigger reports to.
//!
//! `Notifier` is the seam: handlers pass a per-request `ToastQueue`, tests
//! inspect the same queue after the call.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Normal,
    Destructive,
}

/// One transient, user-visible message.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub emitted_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
            severity,
            emitted_at: Utc::now(),
        }
    }
}

/// Fire-and-forget notification sink.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications raised while handling one request, in emission order.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Notification>,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Notification] {
        &self.toasts
    }

    pub fn into_toasts(self) -> Vec<Notification> {
        self.toasts
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        tracing::debug!(
            title = %notification.title,
            severity = ?notification.severity,
            "toast queued"
        );
        self.toasts.push(notification);
    }
}
