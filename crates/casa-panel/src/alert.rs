//! User-facing alert queue
//!
//! Store failures and operation outcomes surface here as title/message
//! pairs. The shell drains the queue into whatever modal or toast it renders;
//! nothing in the queue retries or carries structured error codes.

use ulid::Ulid;

/// How the shell should style an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Success,
    Error,
    Info,
}

/// One queued alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: Ulid,
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
}

/// Queue of alerts awaiting display
#[derive(Debug, Default)]
pub struct AlertCenter {
    queue: Vec<Alert>,
}

impl AlertCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an alert and return its id
    pub fn push(
        &mut self,
        severity: AlertSeverity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Ulid {
        let alert = Alert {
            id: Ulid::new(),
            title: title.into(),
            message: message.into(),
            severity,
        };
        let id = alert.id;
        self.queue.push(alert);
        id
    }

    /// Queue a success alert
    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) -> Ulid {
        self.push(AlertSeverity::Success, title, message)
    }

    /// Queue an error alert
    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) -> Ulid {
        self.push(AlertSeverity::Error, title, message)
    }

    /// Alerts currently queued, oldest first
    pub fn pending(&self) -> &[Alert] {
        &self.queue
    }

    /// Remove one alert after the user dismissed it
    pub fn dismiss(&mut self, id: Ulid) {
        self.queue.retain(|alert| alert.id != id);
    }

    /// Take every queued alert, leaving the queue empty
    pub fn drain(&mut self) -> Vec<Alert> {
        std::mem::take(&mut self.queue)
    }
}
