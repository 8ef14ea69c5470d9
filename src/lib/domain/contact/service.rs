//! Contact form service

use std::sync::Arc;

use askama::Template;
use async_trait::async_trait;
use tracing::info;

#[cfg(test)]
use mockall::mock;

use crate::domain::communication::{dispatcher::MailDispatcher, email_addresses::EmailAddress};

use super::{
    emails::{ContactConfirmationTemplate, ContactFormTemplate},
    ContactError,
};

/// Contact form settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactConfig {
    /// Product name used in subjects and signatures
    pub product_name: String,

    /// Team addresses that receive contact form submissions
    pub team_addresses: Vec<EmailAddress>,
}

/// A validated contact form submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: EmailAddress,
    message: String,
}

impl ContactMessage {
    /// Creates a contact message, rejecting a blank name or message
    pub fn new(name: &str, email: EmailAddress, message: &str) -> Result<Self, ContactError> {
        let name = name.trim();
        let message = message.trim();

        if name.is_empty() {
            return Err(ContactError::EmptyName);
        }

        if message.is_empty() {
            return Err(ContactError::EmptyMessage);
        }

        Ok(Self {
            name: name.to_string(),
            email,
            message: message.to_string(),
        })
    }

    /// The visitor's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The visitor's email address
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// The message body
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Contact form service
#[async_trait]
pub trait ContactService: Clone + Send + Sync + 'static {
    /// Forwards a contact form submission to every team address, then sends the
    /// visitor a confirmation. Stops at the first email that cannot be sent.
    async fn send_contact_message(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

#[cfg(test)]
mock! {
    pub ContactService {}

    impl Clone for ContactService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl ContactService for ContactService {
        async fn send_contact_message(&self, message: &ContactMessage) -> Result<(), ContactError>;
    }
}

/// Contact form service implementation
#[derive(Debug, Clone)]
pub struct ContactServiceImpl<D>
where
    D: MailDispatcher,
{
    config: ContactConfig,
    dispatcher: Arc<D>,
}

impl<D> ContactServiceImpl<D>
where
    D: MailDispatcher,
{
    /// Creates a new contact service.
    pub fn new(config: ContactConfig, dispatcher: Arc<D>) -> Self {
        Self { config, dispatcher }
    }

    fn team_subject(&self, message: &ContactMessage) -> String {
        format!("{} Contact Form - {}", self.config.product_name, message.name())
    }

    fn confirmation_subject(&self) -> String {
        format!("Thank you for contacting {}", self.config.product_name)
    }
}

#[async_trait]
impl<D> ContactService for ContactServiceImpl<D>
where
    D: MailDispatcher,
{
    async fn send_contact_message(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let form = ContactFormTemplate {
            name: message.name(),
            email: message.email().as_str(),
            message: message.message(),
        };
        let form_html = css_inline::inline(&form.render()?)?;
        let team_subject = self.team_subject(message);

        for address in &self.config.team_addresses {
            self.dispatcher
                .send_mail(address, &team_subject, &form_html)
                .await?;
        }

        let confirmation = ContactConfirmationTemplate {
            name: message.name(),
            message: message.message(),
            product_name: &self.config.product_name,
        };
        let confirmation_html = css_inline::inline(&confirmation.render()?)?;

        self.dispatcher
            .send_mail(
                message.email(),
                &self.confirmation_subject(),
                &confirmation_html,
            )
            .await?;

        info!(
            from = %message.email(),
            team_addresses = self.config.team_addresses.len(),
            "contact message forwarded"
        );

        Ok(())
    }
}
