//! Interested user repository

use async_trait::async_trait;
use uuid::Uuid;

#[cfg(test)]
use mockall::mock;

use super::CreateInterestedUserError;

/// An interested user to be persisted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewInterestedUser {
    /// Subscriber's name
    pub name: String,

    /// Subscriber's email address
    pub email: String,
}

/// Interested user repository
#[async_trait]
pub trait InterestedUserRepository: Clone + Send + Sync + 'static {
    /// Insert an interested user, returning its ID
    async fn create_interested_user(
        &self,
        user: &NewInterestedUser,
    ) -> Result<Uuid, CreateInterestedUserError>;
}

#[cfg(test)]
mock! {
    pub InterestedUserRepository {}

    impl Clone for InterestedUserRepository {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl InterestedUserRepository for InterestedUserRepository {
        async fn create_interested_user(
            &self,
            user: &NewInterestedUser,
        ) -> Result<Uuid, CreateInterestedUserError>;
    }
}
