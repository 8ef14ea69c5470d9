//! Mail dispatcher service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

#[cfg(test)]
use mockall::mock;

use crate::domain::communication::{
    email_addresses::EmailAddress,
    mail_logs::{MailLogRepository, NewMailLog},
    mailer::{Mailer, Message},
};

use super::{Environment, SendMailError};

/// Settings the dispatcher needs besides its collaborators
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchConfig {
    /// The environment the process runs in
    pub environment: Environment,

    /// Display name used in the From header
    pub product_name: String,

    /// Where every non-production email is delivered instead
    pub sink_address: EmailAddress,
}

/// Sends transactional email and records every attempt
#[async_trait]
pub trait MailDispatcher: Clone + Send + Sync + 'static {
    /// Sends an HTML email to a single recipient.
    ///
    /// Outside production the recipient is replaced by the sink address.
    /// Exactly one mail log is written per call, whatever the outcome.
    ///
    /// # Arguments
    /// * `to` - The [`EmailAddress`] to send the email to.
    /// * `subject` - The subject of the email.
    /// * `html` - The HTML body. It is sent as-is, without escaping.
    ///
    /// # Returns
    /// - [`Ok`] if the SMTP server accepted the message.
    /// - [`Err`] containing a [`SendMailError`] otherwise.
    async fn send_mail(&self, to: &EmailAddress, subject: &str, html: &str)
        -> Result<(), SendMailError>;
}

#[cfg(test)]
mock! {
    pub MailDispatcher {}

    impl Clone for MailDispatcher {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl MailDispatcher for MailDispatcher {
        async fn send_mail(&self, to: &EmailAddress, subject: &str, html: &str) -> Result<(), SendMailError>;
    }
}

/// Mail dispatcher implementation
#[derive(Debug, Clone)]
pub struct MailDispatcherImpl<M, R>
where
    M: Mailer,
    R: MailLogRepository,
{
    config: DispatchConfig,
    mailer: Arc<M>,
    mail_logs: Arc<R>,
}

impl<M, R> MailDispatcherImpl<M, R>
where
    M: Mailer,
    R: MailLogRepository,
{
    /// Creates a new mail dispatcher.
    pub fn new(config: DispatchConfig, mailer: Arc<M>, mail_logs: Arc<R>) -> Self {
        Self {
            config,
            mailer,
            mail_logs,
        }
    }

    fn resolve_recipient(&self, to: &EmailAddress) -> EmailAddress {
        if self.config.environment.is_production() {
            return to.clone();
        }

        debug!(
            environment = %self.config.environment,
            requested = %to,
            sink = %self.config.sink_address,
            "redirecting email to sink address"
        );

        self.config.sink_address.clone()
    }
}

#[async_trait]
impl<M, R> MailDispatcher for MailDispatcherImpl<M, R>
where
    M: Mailer,
    R: MailLogRepository,
{
    async fn send_mail(
        &self,
        to: &EmailAddress,
        subject: &str,
        html: &str,
    ) -> Result<(), SendMailError> {
        let to = self.resolve_recipient(to);
        let message = Message::html(&self.config.product_name, to.clone(), subject, html);

        let result = self.mailer.send_email(&message).await;

        let log = NewMailLog::new(
            to.as_str(),
            subject,
            html,
            result.as_ref().err().map(ToString::to_string),
        );

        if let Err(err) = self.mail_logs.create_mail_log(&log).await {
            warn!(error = %err, %to, subject, "could not write mail log");
        }

        match result {
            Ok(()) => {
                info!(%to, subject, "email sent");

                Ok(())
            }
            Err(err) => {
                error!(error = %err, %to, subject, "unable to send email");

                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::domain::communication::{
        mail_logs::{tests::MockMailLogRepository, CreateMailLogError},
        mailer::{tests::MockMailer, MailerError},
    };

    use super::*;

    const SINK: &str = "hello@clothingloop.org";

    fn config(environment: Environment) -> DispatchConfig {
        DispatchConfig {
            environment,
            product_name: "The Clothing Loop".to_string(),
            sink_address: EmailAddress::new_unchecked(SINK),
        }
    }

    fn recipient() -> EmailAddress {
        EmailAddress::new_unchecked("user@test.com")
    }

    #[tokio::test]
    async fn test_send_mail_in_production_uses_given_recipient() -> TestResult {
        let mut mailer = MockMailer::new();
        let mut mail_logs = MockMailLogRepository::new();

        mailer
            .expect_send_email()
            .times(1)
            .withf(|message| {
                message.to.as_str() == "user@test.com"
                    && message.from_name == "The Clothing Loop"
                    && message.subject == "Reset"
                    && message.html_body == "<p>hi</p>"
                    && message.plain_body.is_empty()
            })
            .returning(|_| Ok(()));

        mail_logs
            .expect_create_mail_log()
            .times(1)
            .withf(|log| {
                *log == NewMailLog::new("user@test.com", "Reset", "<p>hi</p>", None)
            })
            .returning(|_| Ok(Uuid::now_v7()));

        let dispatcher = MailDispatcherImpl::new(
            config(Environment::Production),
            Arc::new(mailer),
            Arc::new(mail_logs),
        );

        dispatcher
            .send_mail(&recipient(), "Reset", "<p>hi</p>")
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_send_mail_outside_production_redirects_to_sink() -> TestResult {
        for environment in [Environment::Acceptance, Environment::Development] {
            let mut mailer = MockMailer::new();
            let mut mail_logs = MockMailLogRepository::new();

            mailer
                .expect_send_email()
                .times(1)
                .withf(|message| message.to.as_str() == SINK)
                .returning(|_| Ok(()));

            mail_logs
                .expect_create_mail_log()
                .times(1)
                .withf(|log| log.to == SINK && log.error.is_none())
                .returning(|_| Ok(Uuid::now_v7()));

            let dispatcher =
                MailDispatcherImpl::new(config(environment), Arc::new(mailer), Arc::new(mail_logs));

            dispatcher
                .send_mail(&recipient(), "Reset", "<p>hi</p>")
                .await?;
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_send_mail_failure_is_logged_and_returned() {
        let mut mailer = MockMailer::new();
        let mut mail_logs = MockMailLogRepository::new();

        mailer.expect_send_email().times(1).returning(|_| {
            Err(MailerError::UnknownError(anyhow!(
                "permanent error (535): 5.7.8 Authentication credentials invalid"
            )))
        });

        mail_logs
            .expect_create_mail_log()
            .times(1)
            .withf(|log| {
                log.to == "user@test.com"
                    && log.error.as_deref()
                        == Some("permanent error (535): 5.7.8 Authentication credentials invalid")
            })
            .returning(|_| Ok(Uuid::now_v7()));

        let dispatcher = MailDispatcherImpl::new(
            config(Environment::Production),
            Arc::new(mailer),
            Arc::new(mail_logs),
        );

        let result = dispatcher
            .send_mail(&recipient(), "Reset", "<p>hi</p>")
            .await;

        assert!(matches!(result, Err(SendMailError::Transport(_))));
    }

    #[tokio::test]
    async fn test_send_mail_ignores_mail_log_failure() -> TestResult {
        let mut mailer = MockMailer::new();
        let mut mail_logs = MockMailLogRepository::new();

        mailer.expect_send_email().times(1).returning(|_| Ok(()));

        mail_logs
            .expect_create_mail_log()
            .times(1)
            .returning(|_| Err(CreateMailLogError::UnknownError(anyhow!("connection reset"))));

        let dispatcher = MailDispatcherImpl::new(
            config(Environment::Production),
            Arc::new(mailer),
            Arc::new(mail_logs),
        );

        dispatcher
            .send_mail(&recipient(), "Reset", "<p>hi</p>")
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_send_mail_twice_sends_and_logs_twice() -> TestResult {
        let mut mailer = MockMailer::new();
        let mut mail_logs = MockMailLogRepository::new();

        mailer.expect_send_email().times(2).returning(|_| Ok(()));

        mail_logs
            .expect_create_mail_log()
            .times(2)
            .returning(|_| Ok(Uuid::now_v7()));

        let dispatcher = MailDispatcherImpl::new(
            config(Environment::Production),
            Arc::new(mailer),
            Arc::new(mail_logs),
        );

        dispatcher.send_mail(&recipient(), "Invite", "<p>join</p>").await?;
        dispatcher.send_mail(&recipient(), "Invite", "<p>join</p>").await?;

        Ok(())
    }
}
