//! Deployment environment

use std::{fmt, str::FromStr};

use thiserror::Error;

/// The environment the process is deployed to.
///
/// Only [`Environment::Production`] delivers mail to real recipients.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development
    #[default]
    Development,

    /// Acceptance / staging
    Acceptance,

    /// Production
    Production,
}

impl Environment {
    /// Whether this is the production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Error parsing an [`Environment`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvironmentError {
    /// The value does not name a known environment
    #[error("unknown environment \"{0}\"")]
    Unknown(String),
}

impl FromStr for Environment {
    type Err = EnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "acceptance" | "staging" => Ok(Environment::Acceptance),
            "development" | "dev" | "local" => Ok(Environment::Development),
            other => Err(EnvironmentError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Development => "development",
            Environment::Acceptance => "acceptance",
            Environment::Production => "production",
        };

        write!(f, "{name}")
    }
}
