//! Postgres implementation of the InterestedUserRepository trait

use async_trait::async_trait;
use sqlx::query;
use uuid::Uuid;

use crate::{
    domain::newsletter::{CreateInterestedUserError, InterestedUserRepository, NewInterestedUser},
    infrastructure::db::postgres::PostgresDatabase,
};

#[async_trait]
impl InterestedUserRepository for PostgresDatabase {
    #[mutants::skip]
    async fn create_interested_user(
        &self,
        user: &NewInterestedUser,
    ) -> Result<Uuid, CreateInterestedUserError> {
        let id = Uuid::now_v7();

        query("INSERT INTO interested_users (id, name, email) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(&user.name)
            .bind(&user.email)
            .execute(self.connection())
            .await?;

        Ok(id)
    }
}
