use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Build-time variable naming the contact relay base URL.
pub const RELAY_ENV: &str = "PORTFOLIO_CONTACT_RELAY";

pub const CONTACT_PATH: &str = "/api/contact";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("relay url `{url}` is invalid: {reason}")]
    InvalidRelay { url: String, reason: String },
}

/// Where contact submissions go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactMode {
    /// POST to `endpoint` and report the relay's answer.
    Relay { endpoint: Url },
    /// Hand the message to the visitor's mail client.
    MailClient { address: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub loading: Duration,
    pub form_reset: Duration,
    pub toast_dismiss: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            loading: Duration::from_millis(1500),
            form_reset: Duration::from_millis(1000),
            toast_dismiss: Duration::from_millis(5000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub contact: ContactMode,
    pub timings: Timings,
}

impl SiteConfig {
    /// Resolves the contact mode. No relay means the mail client is used.
    pub fn resolve(relay: Option<&str>, address: &str) -> Result<Self, ConfigError> {
        let contact = match relay.map(str::trim).filter(|r| !r.is_empty()) {
            Some(base) => ContactMode::Relay {
                endpoint: relay_endpoint(base)?,
            },
            None => ContactMode::MailClient {
                address: address.to_string(),
            },
        };
        Ok(Self {
            contact,
            timings: Timings::default(),
        })
    }

    /// Reads the relay from the build environment. A bad value is logged and the
    /// mail client is used instead.
    pub fn from_build_env(address: &str) -> Self {
        match Self::resolve(option_env!("PORTFOLIO_CONTACT_RELAY"), address) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{RELAY_ENV}: {e}; falling back to mail client");
                Self::mail_client(address)
            }
        }
    }

    pub fn mail_client(address: &str) -> Self {
        Self {
            contact: ContactMode::MailClient {
                address: address.to_string(),
            },
            timings: Timings::default(),
        }
    }
}

fn relay_endpoint(base: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidRelay {
        url: base.to_string(),
        reason,
    };
    let url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    let joined = format!("{}{CONTACT_PATH}", url.as_str().trim_end_matches('/'));
    Url::parse(&joined).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_relay_uses_mail_client() {
        for relay in [None, Some(""), Some("   ")] {
            let config = SiteConfig::resolve(relay, "me@example.com").unwrap();
            assert_eq!(
                config.contact,
                ContactMode::MailClient {
                    address: "me@example.com".to_string()
                }
            );
        }
    }

    #[test]
    fn test_relay_endpoint_joined() {
        for base in ["https://relay.example.com", "https://relay.example.com/"] {
            let config = SiteConfig::resolve(Some(base), "me@example.com").unwrap();
            match config.contact {
                ContactMode::Relay { endpoint } => {
                    assert_eq!(endpoint.as_str(), "https://relay.example.com/api/contact")
                }
                other => panic!("expected relay, got {other:?}"),
            }
        }

        let config = SiteConfig::resolve(Some("http://127.0.0.1:8001/v1"), "x").unwrap();
        assert_eq!(
            config.contact,
            ContactMode::Relay {
                endpoint: Url::parse("http://127.0.0.1:8001/v1/api/contact").unwrap()
            }
        );
    }

    #[test]
    fn test_invalid_relay_rejected() {
        let err = SiteConfig::resolve(Some("not a url"), "x").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRelay { .. }));

        let err = SiteConfig::resolve(Some("ftp://relay.example.com"), "x").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme `ftp`"));
    }

    #[test]
    fn test_default_timings() {
        let t = Timings::default();
        assert_eq!(t.loading, Duration::from_millis(1500));
        assert_eq!(t.form_reset, Duration::from_millis(1000));
        assert_eq!(t.toast_dismiss, Duration::from_millis(5000));
    }
}
