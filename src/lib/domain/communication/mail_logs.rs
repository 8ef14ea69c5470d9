//! Mail log: one audit record per dispatch attempt

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[cfg(test)]
use mockall::mock;

/// A mail log entry to be persisted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMailLog {
    /// Final recipient, after any non-production redirect
    pub to: String,

    /// Subject line
    pub subject: String,

    /// HTML body
    pub body: String,

    /// Textual form of the send error, `None` when the send succeeded
    pub error: Option<String>,
}

impl NewMailLog {
    /// Creates a new mail log entry
    pub fn new(to: &str, subject: &str, body: &str, error: Option<String>) -> Self {
        Self {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            error,
        }
    }
}

/// Errors that can occur when writing a mail log
#[derive(Debug, Error)]
pub enum CreateMailLogError {
    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl From<sqlx::Error> for CreateMailLogError {
    fn from(err: sqlx::Error) -> Self {
        CreateMailLogError::UnknownError(err.into())
    }
}

/// Mail log repository
#[async_trait]
pub trait MailLogRepository: Clone + Send + Sync + 'static {
    /// Insert a mail log, returning its ID
    async fn create_mail_log(&self, log: &NewMailLog) -> Result<Uuid, CreateMailLogError>;
}

#[cfg(test)]
mock! {
    pub MailLogRepository {}

    impl Clone for MailLogRepository {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl MailLogRepository for MailLogRepository {
        async fn create_mail_log(&self, log: &NewMailLog) -> Result<Uuid, CreateMailLogError>;
    }
}
