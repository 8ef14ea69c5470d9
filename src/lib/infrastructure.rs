//! Infrastructure layer: SMTP, Postgres and HTTP adapters

pub mod db;
pub mod email;
pub mod http;
