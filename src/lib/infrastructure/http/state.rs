//! Application state module

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};

use crate::domain::{contact::ContactService, newsletter::NewsletterService};

/// Global application state
#[derive(Clone)]
pub struct AppState<C: ContactService, N: NewsletterService> {
    /// The time the server started
    pub start_time: DateTime<Utc>,

    /// Contact form service
    pub contact: Arc<C>,

    /// Newsletter service
    pub newsletter: Arc<N>,
}

impl<C, N> AppState<C, N>
where
    C: ContactService,
    N: NewsletterService,
{
    /// Create a new application state
    pub fn new(contact: C, newsletter: N) -> Self {
        Self {
            start_time: Utc::now(),
            contact: Arc::new(contact),
            newsletter: Arc::new(newsletter),
        }
    }
}

impl<C, N> fmt::Debug for AppState<C, N>
where
    C: ContactService,
    N: NewsletterService,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .field("contact", &"ContactService")
            .field("newsletter", &"NewsletterService")
            .finish()
    }
}

#[cfg(test)]
use crate::domain::{contact::tests::MockContactService, newsletter::tests::MockNewsletterService};

#[cfg(test)]
pub fn test_state(
    contact: Option<MockContactService>,
    newsletter: Option<MockNewsletterService>,
) -> AppState<MockContactService, MockNewsletterService> {
    AppState::new(
        contact.unwrap_or_else(MockContactService::new),
        newsletter.unwrap_or_else(MockNewsletterService::new),
    )
}
