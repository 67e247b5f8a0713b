use std::time::Duration;

use async_trait::async_trait;

use super::ContactPayload;
use crate::notify::Notification;

/// What happens to the form after a submission settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetPolicy {
    Immediately,
    After(Duration),
    Keep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub ok: bool,
    pub title: String,
    pub message: String,
    pub reset: ResetPolicy,
}

impl SubmitOutcome {
    pub fn success(title: impl Into<String>, message: impl Into<String>, reset: ResetPolicy) -> Self {
        Self {
            ok: true,
            title: title.into(),
            message: message.into(),
            reset,
        }
    }

    /// Failures never touch the form.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            title: "Error".to_string(),
            message: message.into(),
            reset: ResetPolicy::Keep,
        }
    }

    pub fn notification(&self) -> Notification {
        if self.ok {
            Notification::info(&self.title, &self.message)
        } else {
            Notification::error(&self.title, &self.message)
        }
    }
}

/// Delivers a validated message. Implementations never fail outright; every
/// error is folded into a failed outcome.
#[async_trait(?Send)]
pub trait SubmitStrategy {
    async fn submit(&self, payload: &ContactPayload) -> SubmitOutcome;
}
