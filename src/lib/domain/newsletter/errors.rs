//! Newsletter errors

use css_inline::InlineError;
use thiserror::Error;
use tracing::debug;

use crate::domain::communication::dispatcher::SendMailError;

/// Errors that can occur when storing an interested user
#[derive(Debug, Error)]
pub enum CreateInterestedUserError {
    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl From<sqlx::Error> for CreateInterestedUserError {
    fn from(err: sqlx::Error) -> Self {
        debug!("sqlx::Error -> CreateInterestedUserError");

        CreateInterestedUserError::UnknownError(err.into())
    }
}

/// Errors that can occur when subscribing to the newsletter
#[derive(Debug, Error)]
pub enum NewsletterError {
    /// No name was given
    #[error("name is empty")]
    EmptyName,

    /// The subscription could not be stored
    #[error("could not store subscription: {0}")]
    CouldNotStoreSubscription(#[from] CreateInterestedUserError),

    /// The confirmation could not be sent
    #[error("could not send subscription email: {0}")]
    CouldNotSendEmail(#[from] SendMailError),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl From<InlineError> for NewsletterError {
    fn from(err: InlineError) -> Self {
        debug!("InlineError -> NewsletterError");

        NewsletterError::UnknownError(err.into())
    }
}

impl From<askama::Error> for NewsletterError {
    fn from(err: askama::Error) -> Self {
        debug!("askama::Error -> NewsletterError");

        NewsletterError::UnknownError(err.into())
    }
}
