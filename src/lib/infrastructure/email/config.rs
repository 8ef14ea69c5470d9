//! Mail dispatch configuration

use clap::Parser;

use crate::domain::{
    communication::{
        dispatcher::{DispatchConfig, Environment},
        email_addresses::EmailAddress,
    },
    contact::ContactConfig,
    newsletter::NewsletterConfig,
};

/// Mail configuration
#[derive(Clone, Debug, Parser)]
pub struct MailConfig {
    /// The deployment environment. Outside production every email goes to the sink address.
    #[arg(long, env = "APP_ENV", default_value = "development")]
    pub app_env: Environment,

    /// Display name used in the From header
    #[arg(long, env = "MAIL_PRODUCT_NAME", default_value = "The Clothing Loop")]
    pub mail_product_name: String,

    /// Recipient of every email sent outside production
    #[arg(long, env = "MAIL_SINK_ADDRESS", default_value = "hello@clothingloop.org")]
    pub mail_sink_address: EmailAddress,

    /// Team addresses receiving contact form submissions, separated by `;`
    #[arg(
        long,
        env = "CONTACT_EMAILS",
        value_delimiter = ';',
        default_value = "hello@clothingloop.org"
    )]
    pub contact_emails: Vec<EmailAddress>,
}

impl MailConfig {
    /// Settings for the mail dispatcher
    pub fn dispatch_config(&self) -> DispatchConfig {
        DispatchConfig {
            environment: self.app_env,
            product_name: self.mail_product_name.clone(),
            sink_address: self.mail_sink_address.clone(),
        }
    }

    /// Settings for the contact form
    pub fn contact_config(&self) -> ContactConfig {
        ContactConfig {
            product_name: self.mail_product_name.clone(),
            team_addresses: self.contact_emails.clone(),
        }
    }

    /// Settings for the newsletter
    pub fn newsletter_config(&self) -> NewsletterConfig {
        NewsletterConfig {
            product_name: self.mail_product_name.clone(),
        }
    }
}
