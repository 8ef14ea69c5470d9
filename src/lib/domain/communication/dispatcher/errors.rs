//! Dispatch errors

use thiserror::Error;

use crate::domain::communication::mailer::MailerError;

/// The email could not be sent. The attempt has already been logged.
#[derive(Debug, Error)]
pub enum SendMailError {
    /// The mailer failed to build or deliver the message
    #[error("unable to send email: {0}")]
    Transport(#[from] MailerError),
}
