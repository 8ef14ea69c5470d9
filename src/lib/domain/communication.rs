//! Outbound email: addresses, the mailer seam, the audit log and the dispatcher.

pub mod dispatcher;
pub mod email_addresses;
pub mod mail_logs;
pub mod mailer;
