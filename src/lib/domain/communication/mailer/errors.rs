//! Mailer errors

use lettre::{address::AddressError, error::Error as MessageError, transport::smtp};
use thiserror::Error;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// The sender or recipient could not be parsed as a mailbox
    #[error("Invalid email address")]
    InvalidEmail,

    /// The message could not be assembled
    #[error("Could not build email: {0}")]
    BuildError(String),

    /// Unknown error, including every SMTP failure
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::UnknownError(err)
    }
}

impl From<AddressError> for MailerError {
    fn from(_err: AddressError) -> Self {
        MailerError::InvalidEmail
    }
}

impl From<MessageError> for MailerError {
    fn from(err: MessageError) -> Self {
        MailerError::BuildError(err.to_string())
    }
}

impl From<smtp::Error> for MailerError {
    fn from(err: smtp::Error) -> Self {
        MailerError::UnknownError(err.into())
    }
}
