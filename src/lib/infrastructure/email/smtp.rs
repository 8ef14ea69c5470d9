//! SMTP email service implementation

use std::fmt;

use async_trait::async_trait;
use clap::Parser;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::{
        authentication::{Credentials, Mechanism},
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message as LettreMessage, Tokio1Executor,
};
use tracing::debug;

use crate::domain::communication::mailer::{Mailer, MailerError, Message};

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SMTPConfig {
    /// The SMTP host
    #[arg(id = "smtp_host", long = "smtp-host", env = "SMTP_HOST")]
    pub host: String,

    /// The SMTP port. 465 and 587 use STARTTLS, anything else is unencrypted.
    #[arg(id = "smtp_port", long = "smtp-port", env = "SMTP_PORT")]
    pub port: u16,

    /// The sender address, also used as the SMTP username
    #[arg(id = "smtp_sender", long = "smtp-sender", env = "SMTP_SENDER")]
    pub sender: String,

    /// The SMTP password
    #[arg(
        id = "smtp_password",
        long = "smtp-password",
        env = "SMTP_PASSWORD",
        hide_env_values = true
    )]
    pub password: String,

    /// Accept any certificate during STARTTLS. Only for servers with self-signed certificates.
    #[arg(
        id = "smtp_accept_invalid_certs",
        long = "smtp-accept-invalid-certs",
        env = "SMTP_ACCEPT_INVALID_CERTS"
    )]
    pub accept_invalid_certs: bool,
}

/// Transport security, chosen once from the configured port
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SmtpSecurity {
    /// Upgrade the connection with STARTTLS before authenticating
    StartTls,

    /// Unencrypted connection
    Plain,
}

impl SmtpSecurity {
    /// Picks the transport security for `port`
    pub fn for_port(port: u16) -> Self {
        match port {
            465 | 587 => SmtpSecurity::StartTls,
            _ => SmtpSecurity::Plain,
        }
    }
}

/// SMTP mailer
///
/// Opens a new connection for every email.
#[derive(Clone)]
pub struct SMTPMailer {
    config: SMTPConfig,
    address: String,
    credentials: Credentials,
    security: SmtpSecurity,
}

impl SMTPMailer {
    /// Create a new SMTP mailer, deriving the server address, PLAIN credentials
    /// and transport security from `config`
    pub fn new(config: SMTPConfig) -> Self {
        let address = format!("{}:{}", config.host, config.port);
        let credentials = Credentials::new(config.sender.clone(), config.password.clone());
        let security = SmtpSecurity::for_port(config.port);

        Self {
            config,
            address,
            credentials,
            security,
        }
    }

    /// The `host:port` the mailer connects to
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The transport security used for every send
    pub fn security(&self) -> SmtpSecurity {
        self.security
    }

    /// Build a transport for a single send
    pub fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailerError> {
        let builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.host)
            .port(self.config.port)
            .credentials(self.credentials.clone())
            .authentication(vec![Mechanism::Plain]);

        let tls = match self.security {
            SmtpSecurity::StartTls => Tls::Required(
                TlsParameters::builder(self.config.host.clone())
                    .dangerous_accept_invalid_certs(self.config.accept_invalid_certs)
                    .build()?,
            ),
            SmtpSecurity::Plain => Tls::None,
        };

        Ok(builder.tls(tls).build())
    }

    /// Build the MIME message: `"<name> <sender>"` as From, one recipient,
    /// an empty plain text part and the HTML part
    pub fn build_message(&self, message: &Message) -> Result<LettreMessage, MailerError> {
        let from = Mailbox::new(Some(message.from_name.clone()), self.config.sender.parse()?);

        Ok(LettreMessage::builder()
            .from(from)
            .to(message.to.as_str().parse()?)
            .subject(message.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                message.plain_body.clone(),
                message.html_body.clone(),
            ))?)
    }
}

impl fmt::Debug for SMTPMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SMTPMailer")
            .field("address", &self.address)
            .field("sender", &self.config.sender)
            .field("security", &self.security)
            .field("accept_invalid_certs", &self.config.accept_invalid_certs)
            .finish()
    }
}

#[async_trait]
impl Mailer for SMTPMailer {
    #[mutants::skip]
    async fn send_email(&self, message: &Message) -> Result<(), MailerError> {
        let email = self.build_message(message)?;

        debug!(address = %self.address, security = ?self.security, "sending email");

        self.transport()?.send(email).await?;

        Ok(())
    }
}
