//! Newsletter: records interested users and thanks them for subscribing.

mod emails;
mod errors;
mod repository;
mod service;

pub use errors::{CreateInterestedUserError, NewsletterError};
pub use repository::{InterestedUserRepository, NewInterestedUser};
pub use service::{NewsletterConfig, NewsletterService, NewsletterServiceImpl, Subscription};

#[cfg(test)]
pub mod tests {
    pub use super::repository::MockInterestedUserRepository;
    pub use super::service::MockNewsletterService;
}
