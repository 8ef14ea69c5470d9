//! Mailer module

mod errors;
mod message;

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

pub use errors::MailerError;
pub use message::Message;

/// Outbound email transport
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `message` - The [`Message`] to deliver to its single recipient.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure. The error's [`Display`](std::fmt::Display)
    /// form is what ends up in the mail log.
    async fn send_email(&self, message: &Message) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send_email(&self, message: &Message) -> Result<(), MailerError>;
    }
}

#[cfg(test)]
pub mod tests {
    pub use super::MockMailer;
}
