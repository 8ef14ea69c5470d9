//! Contact form errors

use css_inline::InlineError;
use thiserror::Error;
use tracing::debug;

use crate::domain::communication::dispatcher::SendMailError;

/// Errors that can occur when handling a contact form submission
#[derive(Debug, Error)]
pub enum ContactError {
    /// No name was given
    #[error("name is empty")]
    EmptyName,

    /// No message was given
    #[error("message is empty")]
    EmptyMessage,

    /// One of the emails could not be sent
    #[error("could not send contact email: {0}")]
    CouldNotSendEmail(#[from] SendMailError),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl From<InlineError> for ContactError {
    fn from(err: InlineError) -> Self {
        debug!("InlineError -> ContactError");

        ContactError::UnknownError(err.into())
    }
}

impl From<askama::Error> for ContactError {
    fn from(err: askama::Error) -> Self {
        debug!("askama::Error -> ContactError");

        ContactError::UnknownError(err.into())
    }
}
