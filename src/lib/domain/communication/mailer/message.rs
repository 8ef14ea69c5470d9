//! Email message

use crate::domain::communication::email_addresses::EmailAddress;

/// An outbound email with a single recipient
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// The recipient of the email
    pub to: EmailAddress,

    /// Display name shown next to the sender address
    pub from_name: String,

    /// The subject of the email
    pub subject: String,

    /// The HTML body of the email
    pub html_body: String,

    /// The plain text body of the email
    pub plain_body: String,
}

impl Message {
    /// Creates an HTML-only message. The plain text part is left empty.
    pub fn html(from_name: &str, to: EmailAddress, subject: &str, html_body: &str) -> Self {
        Self {
            to,
            from_name: from_name.to_string(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
            plain_body: String::new(),
        }
    }
}
