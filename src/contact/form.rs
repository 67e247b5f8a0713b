use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deliberately loose: something, "@", something, ".", something.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern should compile"));

pub const MIN_MESSAGE_LEN: usize = 10;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a subject.")]
    MissingSubject,
    #[error("Please enter a message with at least 10 characters.")]
    MessageTooShort,
}

impl ValidationError {
    pub fn field(self) -> Field {
        match self {
            Self::MissingName => Field::Name,
            Self::InvalidEmail => Field::Email,
            Self::MissingSubject => Field::Subject,
            Self::MessageTooShort => Field::Message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Form control name, also the JSON key sent to the relay.
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

/// Body of a contact submission, both for the relay and the mailto link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Live form input. Fields are always strings so inputs stay controlled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Rules run in order and stop at the first failure.
    pub fn validate(&self) -> Result<ContactPayload, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.email.trim().is_empty() || !EMAIL.is_match(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.subject.trim().is_empty() {
            return Err(ValidationError::MissingSubject);
        }
        if self.message.trim().encode_utf16().count() < MIN_MESSAGE_LEN {
            return Err(ValidationError::MessageTooShort);
        }
        Ok(ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactForm {
        ContactForm {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            subject: "S".to_string(),
            message: "0123456789".to_string(),
        }
    }

    #[test]
    fn test_valid_form_produces_payload() {
        let payload = valid().validate().unwrap();
        assert_eq!(payload.name, "A");
        assert_eq!(payload.message, "0123456789");
    }

    #[test]
    fn test_empty_name() {
        let mut form = valid();
        form.set(Field::Name, "   ");
        assert_eq!(form.validate(), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_email_pattern() {
        let mut form = valid();
        for bad in ["", "abc", "a@b", "@b.c", "a b@c"] {
            form.set(Field::Email, bad);
            assert_eq!(
                form.validate(),
                Err(ValidationError::InvalidEmail),
                "{bad:?} should be rejected"
            );
        }
        form.set(Field::Email, "first.last@sub.example.org");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_missing_subject() {
        let mut form = valid();
        form.set(Field::Subject, "\t");
        assert_eq!(form.validate(), Err(ValidationError::MissingSubject));
    }

    #[test]
    fn test_message_length_boundary() {
        let mut form = valid();
        form.set(Field::Message, "  123456789  ");
        assert_eq!(form.validate(), Err(ValidationError::MessageTooShort));
        form.set(Field::Message, "  1234567890  ");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_message_length_counts_utf16_units() {
        let mut form = valid();
        // each emoji is a surrogate pair
        form.set(Field::Message, "🎮🎬🎨🎧🎲");
        assert!(form.validate().is_ok());
        form.set(Field::Message, "🎮🎬🎨🎧");
        assert_eq!(form.validate(), Err(ValidationError::MessageTooShort));
        form.set(Field::Message, "ééééééééé");
        assert_eq!(form.validate(), Err(ValidationError::MessageTooShort));
    }

    #[test]
    fn test_rules_short_circuit_in_order() {
        let form = ContactForm::default();
        let err = form.validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingName);
        assert_eq!(err.field(), Field::Name);
        assert_eq!(err.to_string(), "Please enter your name.");

        let form = ContactForm {
            name: "A".to_string(),
            email: "nope".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_set_get_clear() {
        let mut form = valid();
        assert_eq!(form.get(Field::Subject), "S");
        form.clear();
        assert!(form.is_empty());
        assert_eq!(form.get(Field::Message), "");
    }
}
