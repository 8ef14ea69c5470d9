//! Mail dispatcher: redirect, send, audit.

mod environment;
mod errors;
mod service;

pub use environment::{Environment, EnvironmentError};
pub use errors::SendMailError;
pub use service::{DispatchConfig, MailDispatcher, MailDispatcherImpl};
