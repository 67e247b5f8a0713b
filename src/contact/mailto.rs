use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::ContactPayload;

/// Everything but the characters a URI component may carry unescaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

pub fn message_body(payload: &ContactPayload) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        payload.name, payload.email, payload.message
    )
}

/// `mailto:` link with subject and body pre-filled.
pub fn compose(address: &str, payload: &ContactPayload) -> String {
    format!(
        "mailto:{address}?subject={}&body={}",
        encode_component(&payload.subject),
        encode_component(&message_body(payload))
    )
}

/// Bare link for the "email me directly" control.
pub fn direct(address: &str) -> String {
    format!("mailto:{address}")
}
