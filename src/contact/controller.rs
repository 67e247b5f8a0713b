use super::{ContactForm, ContactPayload, Field, ResetPolicy, SubmitOutcome, SubmitStrategy};
use crate::notify::Notification;

pub const VALIDATION_TITLE: &str = "Validation Error";

/// Result of asking to submit the current form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Begin {
    /// Valid; the controller is now submitting until `complete`.
    Ready(ContactPayload),
    /// Invalid; nothing was sent.
    Rejected(Notification),
    /// A submission is already in flight.
    Busy,
}

/// Form contents plus the in-flight flag. At most one submission runs at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactController {
    form: ContactForm,
    submitting: bool,
}

impl ContactController {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn begin(&mut self) -> Begin {
        if self.submitting {
            return Begin::Busy;
        }
        match self.form.validate() {
            Ok(payload) => {
                self.submitting = true;
                Begin::Ready(payload)
            }
            Err(e) => Begin::Rejected(Notification::error(VALIDATION_TITLE, e.to_string())),
        }
    }

    /// Settles the in-flight submission. A delayed reset is left to the caller's
    /// timer, which calls `reset`.
    pub fn complete(&mut self, outcome: &SubmitOutcome) -> Notification {
        self.submitting = false;
        if outcome.reset == ResetPolicy::Immediately {
            self.form.clear();
        }
        outcome.notification()
    }

    pub fn reset(&mut self) {
        self.form.clear();
    }

    /// Runs one full submission against `strategy`, applying any delayed reset
    /// at once. Returns `None` when busy.
    pub async fn submit(&mut self, strategy: &dyn SubmitStrategy) -> Option<Notification> {
        match self.begin() {
            Begin::Busy => None,
            Begin::Rejected(notification) => Some(notification),
            Begin::Ready(payload) => {
                let outcome = strategy.submit(&payload).await;
                let notification = self.complete(&outcome);
                if let ResetPolicy::After(_) = outcome.reset {
                    self.reset();
                }
                Some(notification)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use async_trait::async_trait;

    use super::*;

    struct Counting {
        calls: Cell<usize>,
        outcome: SubmitOutcome,
    }

    #[async_trait(?Send)]
    impl SubmitStrategy for Counting {
        async fn submit(&self, _payload: &ContactPayload) -> SubmitOutcome {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    fn filled() -> ContactController {
        let mut c = ContactController::default();
        c.set(Field::Name, "A");
        c.set(Field::Email, "a@b.com");
        c.set(Field::Subject, "S");
        c.set(Field::Message, "0123456789");
        c
    }

    #[test]
    fn test_busy_while_submitting() {
        let mut c = filled();
        assert!(matches!(c.begin(), Begin::Ready(_)));
        assert!(c.is_submitting());
        assert_eq!(c.begin(), Begin::Busy);

        c.complete(&SubmitOutcome::failure("nope"));
        assert!(!c.is_submitting());
        assert!(matches!(c.begin(), Begin::Ready(_)));
    }

    #[test]
    fn test_invalid_form_never_submits() {
        let mut c = filled();
        c.set(Field::Message, "short");
        match c.begin() {
            Begin::Rejected(n) => {
                assert_eq!(n.title, VALIDATION_TITLE);
                assert_eq!(
                    n.description,
                    "Please enter a message with at least 10 characters."
                );
                assert!(n.is_error());
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(!c.is_submitting());
    }

    #[test]
    fn test_complete_applies_reset_policy() {
        let mut c = filled();
        c.begin();
        c.complete(&SubmitOutcome::success("t", "m", ResetPolicy::Immediately));
        assert!(c.form().is_empty());

        let mut c = filled();
        c.begin();
        let n = c.complete(&SubmitOutcome::failure("boom"));
        assert_eq!(c.form(), filled().form());
        assert!(n.is_error());
        assert_eq!(n.description, "boom");
    }

    #[tokio::test]
    async fn test_submit_calls_strategy_once() {
        let strategy = Counting {
            calls: Cell::new(0),
            outcome: SubmitOutcome::success("Sent", "ok", ResetPolicy::Immediately),
        };
        let mut c = filled();
        let n = c.submit(&strategy).await.unwrap();
        assert_eq!(strategy.calls.get(), 1);
        assert_eq!(n.title, "Sent");
        assert!(c.form().is_empty());

        let n = c.submit(&strategy).await.unwrap();
        assert_eq!(strategy.calls.get(), 1);
        assert_eq!(n.description, "Please enter your name.");
    }
}
