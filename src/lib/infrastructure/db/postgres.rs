//! Postgres module

mod interested_users;
mod mail_logs;

use anyhow::{Context, Result};
use clap::Parser;
use sqlx::PgPool;
use tracing::info;

/// Database connection
#[derive(Debug, Clone)]
pub struct PostgresDatabase {
    /// The database connection pool
    pub pool: PgPool,
}

impl PostgresDatabase {
    /// Create a new database connection
    #[mutants::skip]
    pub async fn new(connection_string: &str) -> Result<Self> {
        Ok(Self {
            pool: PgPool::connect(connection_string)
                .await
                .context("failed to connect to the database")?,
        })
    }

    /// Apply pending migrations
    #[mutants::skip]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("failed to run database migrations")?;

        info!("database migrations applied");

        Ok(())
    }

    /// Returns the underlying database connection
    pub fn connection(&self) -> &PgPool {
        &self.pool
    }
}

/// Database connection details
#[derive(Debug, Parser)]
pub struct DatabaseConnectionDetails {
    /// The database connection string
    #[arg(long = "database-url", env = "DATABASE_URL", hide_env_values = true)]
    pub connection_string: String,
}
