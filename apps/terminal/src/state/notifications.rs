//! # Notification Queue
//!
//! Messages for the operator. Commands push, the shell drains after every
//! action and prints them; nothing blocks waiting for acknowledgement.

use std::collections::VecDeque;

use uuid::Uuid;

use crate::error::{AppError, ErrorCode};

/// How a notification is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Warning => "⚠️",
            Severity::Error => "❌",
        }
    }
}

/// One queued message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Handle for [`NotificationQueue::dismiss`]
    pub id: Uuid,
    pub severity: Severity,
    pub message: String,
}

/// FIFO of pending notifications.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a message and returns its id.
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.pending.push_back(Notification {
            id,
            severity,
            message: message.into(),
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> Uuid {
        self.push(Severity::Success, message)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> Uuid {
        self.push(Severity::Warning, message)
    }

    /// Queues a failed command. Validation problems are warnings, the rest
    /// are errors.
    pub fn error(&mut self, err: &AppError) -> Uuid {
        let severity = match err.code {
            ErrorCode::Validation | ErrorCode::NotFound => Severity::Warning,
            ErrorCode::Server | ErrorCode::Network => Severity::Error,
        };
        self.push(severity, err.message.clone())
    }

    /// Removes a notification before it is shown. Returns whether it was
    /// still pending.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.pending.len();
        self.pending.retain(|n| n.id != id);
        self.pending.len() != before
    }

    /// Takes every pending notification, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }

    pub fn pending(&self) -> impl Iterator<Item = &Notification> {
        self.pending.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
