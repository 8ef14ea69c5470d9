//! Postgres implementation of the MailLogRepository trait

use async_trait::async_trait;
use sqlx::query;
use uuid::Uuid;

use crate::{
    domain::communication::mail_logs::{CreateMailLogError, MailLogRepository, NewMailLog},
    infrastructure::db::postgres::PostgresDatabase,
};

#[async_trait]
impl MailLogRepository for PostgresDatabase {
    #[mutants::skip]
    async fn create_mail_log(&self, log: &NewMailLog) -> Result<Uuid, CreateMailLogError> {
        let id = Uuid::now_v7();

        query(
            r#"
            INSERT INTO mail_logs (id, recipient, subject, body, error)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(&log.to)
        .bind(&log.subject)
        .bind(&log.body)
        .bind(log.error.as_deref())
        .execute(self.connection())
        .await?;

        Ok(id)
    }
}
