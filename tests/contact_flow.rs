use std::cell::RefCell;
use std::time::Duration;

use httpmock::prelude::*;
use portfolio_site::config::{ContactMode, SiteConfig};
use portfolio_site::contact::{
    mailto, strategy_for, ContactController, ContactError, Field, MailLauncher,
};
use portfolio_site::notify::Notifications;
use serde_json::json;

fn filled() -> ContactController {
    let mut c = ContactController::default();
    c.set(Field::Name, "A");
    c.set(Field::Email, "a@b.com");
    c.set(Field::Subject, "S");
    c.set(Field::Message, "0123456789");
    c
}

fn no_launch(_: &str) -> Result<(), ContactError> {
    Err(ContactError::Launch("not expected in this test".to_string()))
}

#[tokio::test]
async fn test_relay_success_clears_form() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"success": true, "message": "ok"}));
        })
        .await;

    let config = SiteConfig::resolve(Some(&server.base_url()), "me@example.com").unwrap();
    assert!(matches!(config.contact, ContactMode::Relay { .. }));
    let strategy = strategy_for(&config, no_launch);

    let mut toasts = Notifications::default();
    let mut controller = filled();
    let notification = controller.submit(strategy.as_ref()).await.unwrap();
    toasts.push(notification);

    mock.assert_async().await;
    assert!(controller.form().is_empty());
    assert!(!controller.is_submitting());
    assert_eq!(toasts.len(), 1);
    let (_, shown) = toasts.iter().next().unwrap();
    assert!(!shown.is_error());
    assert_eq!(shown.description, "ok");
}

#[tokio::test]
async fn test_relay_failure_keeps_form() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(500);
        })
        .await;

    let config = SiteConfig::resolve(Some(&server.base_url()), "me@example.com").unwrap();
    let strategy = strategy_for(&config, no_launch);

    let mut toasts = Notifications::default();
    let mut controller = filled();
    let notification = controller.submit(strategy.as_ref()).await.unwrap();
    toasts.push(notification);

    assert_eq!(controller.form(), filled().form());
    assert!(!controller.is_submitting());
    assert_eq!(toasts.len(), 1);
    assert!(toasts.iter().all(|(_, n)| n.is_error() && n.title == "Error"));
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(200).json_body(json!({"success": true}));
        })
        .await;

    let config = SiteConfig::resolve(Some(&server.base_url()), "me@example.com").unwrap();
    let strategy = strategy_for(&config, no_launch);

    let mut controller = filled();
    controller.set(Field::Email, "abc");
    let notification = controller.submit(strategy.as_ref()).await.unwrap();

    mock.assert_hits_async(0).await;
    assert_eq!(notification.title, "Validation Error");
    assert_eq!(notification.description, "Please enter a valid email address.");
    assert_eq!(controller.form().email, "abc");
}

#[tokio::test]
async fn test_mail_client_flow() {
    struct Recorder<'a>(&'a RefCell<Vec<String>>);

    impl MailLauncher for Recorder<'_> {
        fn launch(&self, uri: &str) -> Result<(), ContactError> {
            self.0.borrow_mut().push(uri.to_string());
            Ok(())
        }
    }

    let opened = RefCell::new(Vec::new());
    let config = SiteConfig::resolve(None, "me@example.com").unwrap();
    assert_eq!(config.timings.form_reset, Duration::from_millis(1000));

    let strategy = portfolio_site::contact::MailClientStrategy::new(
        "me@example.com",
        Recorder(&opened),
        config.timings.form_reset,
    );
    let mut controller = filled();
    let expected = controller.form().validate().unwrap();
    let notification = controller.submit(&strategy).await.unwrap();

    assert_eq!(notification.title, "Opening Email Client");
    assert_eq!(
        opened.borrow().as_slice(),
        [mailto::compose("me@example.com", &expected)]
    );
    assert!(controller.form().is_empty());
}
