//! Contact form: forwards a visitor's message to the team and confirms receipt.

mod emails;
mod errors;
mod service;

pub use errors::ContactError;
pub use service::{ContactConfig, ContactMessage, ContactService, ContactServiceImpl};

#[cfg(test)]
pub mod tests {
    pub use super::service::MockContactService;
}
