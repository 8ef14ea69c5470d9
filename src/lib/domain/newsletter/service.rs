//! Newsletter service

use std::sync::Arc;

use askama::Template;
use async_trait::async_trait;
use tracing::info;

#[cfg(test)]
use mockall::mock;

use crate::domain::communication::{dispatcher::MailDispatcher, email_addresses::EmailAddress};

use super::{
    emails::SubscriptionConfirmationTemplate, InterestedUserRepository, NewInterestedUser,
    NewsletterError,
};

/// Newsletter settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsletterConfig {
    /// Product name used in the subject and signature
    pub product_name: String,
}

/// A validated newsletter subscription
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subscription {
    name: String,
    email: EmailAddress,
}

impl Subscription {
    /// Creates a subscription, rejecting a blank name
    pub fn new(name: &str, email: EmailAddress) -> Result<Self, NewsletterError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(NewsletterError::EmptyName);
        }

        Ok(Self {
            name: name.to_string(),
            email,
        })
    }

    /// The subscriber's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The subscriber's email address
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

/// Newsletter service
#[async_trait]
pub trait NewsletterService: Clone + Send + Sync + 'static {
    /// Stores the subscriber as an interested user, then thanks them by email.
    async fn subscribe(&self, subscription: &Subscription) -> Result<(), NewsletterError>;
}

#[cfg(test)]
mock! {
    pub NewsletterService {}

    impl Clone for NewsletterService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl NewsletterService for NewsletterService {
        async fn subscribe(&self, subscription: &Subscription) -> Result<(), NewsletterError>;
    }
}

/// Newsletter service implementation
#[derive(Debug, Clone)]
pub struct NewsletterServiceImpl<R, D>
where
    R: InterestedUserRepository,
    D: MailDispatcher,
{
    config: NewsletterConfig,
    repository: Arc<R>,
    dispatcher: Arc<D>,
}

impl<R, D> NewsletterServiceImpl<R, D>
where
    R: InterestedUserRepository,
    D: MailDispatcher,
{
    /// Creates a new newsletter service.
    pub fn new(config: NewsletterConfig, repository: Arc<R>, dispatcher: Arc<D>) -> Self {
        Self {
            config,
            repository,
            dispatcher,
        }
    }
}

#[async_trait]
impl<R, D> NewsletterService for NewsletterServiceImpl<R, D>
where
    R: InterestedUserRepository,
    D: MailDispatcher,
{
    async fn subscribe(&self, subscription: &Subscription) -> Result<(), NewsletterError> {
        let id = self
            .repository
            .create_interested_user(&NewInterestedUser {
                name: subscription.name().to_string(),
                email: subscription.email().to_string(),
            })
            .await?;

        let template = SubscriptionConfirmationTemplate {
            name: subscription.name(),
            product_name: &self.config.product_name,
        };
        let html = css_inline::inline(&template.render()?)?;
        let subject = format!("Thank you for subscribing to {}", self.config.product_name);

        self.dispatcher
            .send_mail(subscription.email(), &subject, &html)
            .await?;

        info!(%id, email = %subscription.email(), "newsletter subscription stored");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::domain::{
        communication::{
            dispatcher::{tests::MockMailDispatcher, SendMailError},
            mailer::MailerError,
        },
        newsletter::{tests::MockInterestedUserRepository, CreateInterestedUserError},
    };

    use super::*;

    fn config() -> NewsletterConfig {
        NewsletterConfig {
            product_name: "The Clothing Loop".to_string(),
        }
    }

    fn subscription() -> Subscription {
        Subscription::new(" Ann ", EmailAddress::new_unchecked("ann@example.com"))
            .expect("valid subscription")
    }

    #[test]
    fn test_subscription_requires_name() {
        let result = Subscription::new("\t", EmailAddress::new_unchecked("ann@example.com"));

        assert!(matches!(result, Err(NewsletterError::EmptyName)));
    }

    #[test]
    fn test_subscription_name_is_trimmed() {
        assert_eq!(subscription().name(), "Ann");
    }

    #[tokio::test]
    async fn test_subscribe_stores_then_thanks_subscriber() -> TestResult {
        let mut repository = MockInterestedUserRepository::new();
        let mut dispatcher = MockMailDispatcher::new();

        repository
            .expect_create_interested_user()
            .times(1)
            .withf(|user| user.name == "Ann" && user.email == "ann@example.com")
            .returning(|_| Ok(Uuid::now_v7()));

        dispatcher
            .expect_send_mail()
            .times(1)
            .withf(|to, subject, html| {
                to.as_str() == "ann@example.com"
                    && subject == "Thank you for subscribing to The Clothing Loop"
                    && html.contains("Hi Ann,")
            })
            .returning(|_, _, _| Ok(()));

        let service =
            NewsletterServiceImpl::new(config(), Arc::new(repository), Arc::new(dispatcher));

        service.subscribe(&subscription()).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_subscribe_sends_nothing_when_store_fails() {
        let mut repository = MockInterestedUserRepository::new();
        let mut dispatcher = MockMailDispatcher::new();

        repository
            .expect_create_interested_user()
            .times(1)
            .returning(|_| {
                Err(CreateInterestedUserError::UnknownError(anyhow!(
                    "connection reset"
                )))
            });

        dispatcher.expect_send_mail().times(0);

        let service =
            NewsletterServiceImpl::new(config(), Arc::new(repository), Arc::new(dispatcher));

        let result = service.subscribe(&subscription()).await;

        assert!(matches!(
            result,
            Err(NewsletterError::CouldNotStoreSubscription(_))
        ));
    }

    #[tokio::test]
    async fn test_subscribe_reports_failed_send() {
        let mut repository = MockInterestedUserRepository::new();
        let mut dispatcher = MockMailDispatcher::new();

        repository
            .expect_create_interested_user()
            .returning(|_| Ok(Uuid::now_v7()));

        dispatcher
            .expect_send_mail()
            .times(1)
            .returning(|_, _, _| Err(SendMailError::Transport(MailerError::InvalidEmail)));

        let service =
            NewsletterServiceImpl::new(config(), Arc::new(repository), Arc::new(dispatcher));

        let result = service.subscribe(&subscription()).await;

        assert!(matches!(result, Err(NewsletterError::CouldNotSendEmail(_))));
    }
}
