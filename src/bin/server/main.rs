#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! REST API and mail dispatcher for the application

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use loop_mailer::{
    domain::{
        communication::dispatcher::MailDispatcherImpl, contact::ContactServiceImpl,
        newsletter::NewsletterServiceImpl,
    },
    infrastructure::{
        db::postgres::{DatabaseConnectionDetails, PostgresDatabase},
        email::{
            config::MailConfig,
            smtp::{SMTPConfig, SMTPMailer},
        },
        http::{state::AppState, HttpServer, HttpServerConfig},
    },
};
use tracing::{info, warn};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The database connection details
    #[clap(flatten)]
    pub db: DatabaseConnectionDetails,

    /// The SMTP connection details
    #[clap(flatten)]
    pub smtp: SMTPConfig,

    /// Environment, sender name and recipients
    #[clap(flatten)]
    pub mail: MailConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load environment: {}", e);

            return Err(e.into());
        }
    }

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let database = Arc::new(PostgresDatabase::new(&args.db.connection_string).await?);
    database.migrate().await?;

    if args.smtp.accept_invalid_certs {
        warn!("SMTP certificate verification is disabled");
    }

    let mailer = Arc::new(SMTPMailer::new(args.smtp));

    info!(
        address = mailer.address(),
        security = ?mailer.security(),
        environment = %args.mail.app_env,
        "mailer initialised"
    );

    let dispatcher = Arc::new(MailDispatcherImpl::new(
        args.mail.dispatch_config(),
        mailer,
        database.clone(),
    ));

    let contact = ContactServiceImpl::new(args.mail.contact_config(), dispatcher.clone());
    let newsletter =
        NewsletterServiceImpl::new(args.mail.newsletter_config(), database, dispatcher);

    HttpServer::new(AppState::new(contact, newsletter), args.server)
        .await?
        .run()
        .await
}
