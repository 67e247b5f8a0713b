//! Contact form: validation, delivery strategies and the submission lifecycle.

mod controller;
mod form;
mod mail_client;
pub mod mailto;
mod relay;
mod strategy;

pub use controller::{Begin, ContactController};
pub use form::{ContactForm, ContactPayload, Field, ValidationError, MIN_MESSAGE_LEN};
pub use mail_client::{BrowserLauncher, MailClientStrategy, MailLauncher, LAUNCH_FAILED_MESSAGE};
pub use relay::RelayStrategy;
pub use strategy::{ResetPolicy, SubmitOutcome, SubmitStrategy};

use thiserror::Error;

use crate::config::{ContactMode, SiteConfig};

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("request to contact relay failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("contact relay answered {status}")]
    Rejected {
        status: http::StatusCode,
        message: Option<String>,
    },
    #[error("contact relay declined the message")]
    Declined { message: Option<String> },
    #[error("could not open mail client: {0}")]
    Launch(String),
}

impl ContactError {
    /// Text the relay itself supplied, if any.
    pub fn relay_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } | Self::Declined { message } => message.as_deref(),
            Self::Http(_) | Self::Launch(_) => None,
        }
    }
}

/// Picks the delivery strategy for the configured contact mode.
pub fn strategy_for<L>(config: &SiteConfig, launcher: L) -> Box<dyn SubmitStrategy>
where
    L: MailLauncher + 'static,
{
    match &config.contact {
        ContactMode::Relay { endpoint } => Box::new(RelayStrategy::new(endpoint.clone())),
        ContactMode::MailClient { address } => Box::new(MailClientStrategy::new(
            address.clone(),
            launcher,
            config.timings.form_reset,
        )),
    }
}
