use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::{ContactError, ContactPayload, ResetPolicy, SubmitOutcome, SubmitStrategy};

pub const SUCCESS_TITLE: &str = "Message Sent Successfully!";
pub const SUCCESS_MESSAGE: &str = "Thank you for reaching out. I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "Failed to send message. Please try again or contact me directly via email.";

#[derive(Debug, Default, Deserialize)]
struct RelayReply {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    /// FastAPI puts validation failures here, as a string or a list.
    detail: Option<serde_json::Value>,
}

impl RelayReply {
    fn text(self) -> Option<String> {
        self.message.filter(|m| !m.trim().is_empty()).or_else(|| match self.detail {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
            _ => None,
        })
    }
}

/// POSTs the message as JSON to a contact relay.
pub struct RelayStrategy {
    client: Client,
    endpoint: Url,
}

impl RelayStrategy {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Ok carries the relay's own success text, if it sent one.
    async fn send(&self, payload: &ContactPayload) -> Result<Option<String>, ContactError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let reply = response.json::<RelayReply>().await.unwrap_or_default();
            return Err(ContactError::Rejected {
                status,
                message: reply.text(),
            });
        }

        let reply = response.json::<RelayReply>().await?;
        if reply.success {
            Ok(reply.text())
        } else {
            Err(ContactError::Declined {
                message: reply.text(),
            })
        }
    }
}

#[async_trait(?Send)]
impl SubmitStrategy for RelayStrategy {
    async fn submit(&self, payload: &ContactPayload) -> SubmitOutcome {
        log::debug!("submitting contact message to {}", self.endpoint);
        match self.send(payload).await {
            Ok(message) => SubmitOutcome::success(
                SUCCESS_TITLE,
                message.unwrap_or_else(|| SUCCESS_MESSAGE.to_string()),
                ResetPolicy::Immediately,
            ),
            Err(e) => {
                log::warn!("contact submission failed: {e}");
                SubmitOutcome::failure(e.relay_message().unwrap_or(FAILURE_MESSAGE))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            subject: "S".to_string(),
            message: "0123456789".to_string(),
        }
    }

    fn strategy(server: &MockServer) -> RelayStrategy {
        RelayStrategy::new(Url::parse(&server.url("/api/contact")).unwrap())
    }

    #[tokio::test]
    async fn test_success_uses_relay_message() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/contact")
                    .json_body(json!({
                        "name": "A",
                        "email": "a@b.com",
                        "subject": "S",
                        "message": "0123456789"
                    }));
                then.status(200).json_body(json!({"success": true, "message": "ok"}));
            })
            .await;

        let outcome = strategy(&server).submit(&payload()).await;

        mock.assert_async().await;
        assert!(outcome.ok);
        assert_eq!(outcome.title, SUCCESS_TITLE);
        assert_eq!(outcome.message, "ok");
        assert_eq!(outcome.reset, ResetPolicy::Immediately);
    }

    #[tokio::test]
    async fn test_success_without_message_uses_default() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/contact");
                then.status(201).json_body(json!({"success": true}));
            })
            .await;

        let outcome = strategy(&server).submit(&payload()).await;
        assert!(outcome.ok);
        assert_eq!(outcome.message, SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_server_error_keeps_form() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/contact");
                then.status(500).body("Internal Server Error");
            })
            .await;

        let outcome = strategy(&server).submit(&payload()).await;
        assert!(!outcome.ok);
        assert_eq!(outcome.title, "Error");
        assert_eq!(outcome.message, FAILURE_MESSAGE);
        assert_eq!(outcome.reset, ResetPolicy::Keep);
    }

    #[tokio::test]
    async fn test_rejection_surfaces_detail() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/contact");
                then.status(422).json_body(json!({"detail": "Subject too long"}));
            })
            .await;

        let outcome = strategy(&server).submit(&payload()).await;
        assert!(!outcome.ok);
        assert_eq!(outcome.message, "Subject too long");
    }

    #[tokio::test]
    async fn test_declined_with_2xx() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/contact");
                then.status(200).json_body(json!({"success": false}));
            })
            .await;

        let outcome = strategy(&server).submit(&payload()).await;
        assert!(!outcome.ok);
        assert_eq!(outcome.message, FAILURE_MESSAGE);

        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/contact");
                then.status(200)
                    .json_body(json!({"success": false, "message": "Mailbox full"}));
            })
            .await;
        let outcome = strategy(&server).submit(&payload()).await;
        assert_eq!(outcome.message, "Mailbox full");
    }

    #[tokio::test]
    async fn test_unreachable_relay() {
        let endpoint = Url::parse("http://127.0.0.1:9/api/contact").unwrap();
        let outcome = RelayStrategy::new(endpoint).submit(&payload()).await;
        assert!(!outcome.ok);
        assert_eq!(outcome.message, FAILURE_MESSAGE);
    }
}
