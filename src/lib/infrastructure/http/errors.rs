//! API error-handling module

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{
    communication::{dispatcher::SendMailError, email_addresses::EmailAddressError},
    contact::ContactError,
    newsletter::NewsletterError,
};

/// The only message a client sees when an email could not be sent
pub const SEND_MAIL_FAILED: &str = "Unable to send email";

/// An error response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// The error message
    #[schema(example = "Internal server error")]
    pub error: String,
}

/// An error raised in the API
#[derive(Debug, Deserialize, ToSchema)]
pub struct ApiError {
    /// The status code
    #[schema(example = 500, value_type = u16)]
    #[serde(with = "http_serde::status_code")]
    pub status: StatusCode,

    /// The error message
    #[schema(example = "Internal server error")]
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Create a new unprocessable entity error
    pub fn new_422(message: &str) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    /// Create new internal server error
    pub fn new_500(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        unknown_error(err.to_string())
    }
}

impl From<EmailAddressError> for ApiError {
    fn from(err: EmailAddressError) -> Self {
        match err {
            EmailAddressError::EmptyEmailAddress => {
                ApiError::new_422("Please provide an email address")
            }
            EmailAddressError::InvalidEmailAddress => {
                ApiError::new_422("Please provide a valid email address")
            }
        }
    }
}

impl From<SendMailError> for ApiError {
    fn from(err: SendMailError) -> Self {
        error!(error = %err, "email dispatch failed");

        ApiError::new_500(SEND_MAIL_FAILED)
    }
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::EmptyName => ApiError::new_422("Please provide your name"),
            ContactError::EmptyMessage => ApiError::new_422("Please provide a message"),
            ContactError::CouldNotSendEmail(err) => err.into(),
            ContactError::UnknownError(err) => unknown_error(err.to_string()),
        }
    }
}

impl From<NewsletterError> for ApiError {
    fn from(err: NewsletterError) -> Self {
        match err {
            NewsletterError::EmptyName => ApiError::new_422("Please provide your name"),
            NewsletterError::CouldNotStoreSubscription(err) => unknown_error(err.to_string()),
            NewsletterError::CouldNotSendEmail(err) => err.into(),
            NewsletterError::UnknownError(err) => unknown_error(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), &rejection.body_text())
    }
}

fn unknown_error(message: String) -> ApiError {
    error!(error = %message, "unknown error");

    ApiError::new_500("An unknown error occurred, please try again")
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use testresult::TestResult;

    use crate::domain::{communication::mailer::MailerError, newsletter::CreateInterestedUserError};

    use super::*;

    #[tokio::test]
    async fn test_error_response() -> TestResult {
        let error = ApiError::new_500("Internal server error");

        let response = error.into_response();
        let body = to_bytes(response.into_body(), usize::MAX).await?;

        assert_eq!(body, r#"{"error":"Internal server error"}"#);

        Ok(())
    }

    #[test]
    fn test_api_error_from_error_hides_details() {
        let api_error = ApiError::from(anyhow!("connection refused on 10.0.0.3:5432"));

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            api_error.message,
            "An unknown error occurred, please try again"
        );
    }

    #[tokio::test]
    async fn test_send_mail_error_is_generic_500() -> TestResult {
        let error = SendMailError::Transport(MailerError::UnknownError(anyhow!(
            "permanent error (535): 5.7.8 Authentication credentials invalid"
        )));

        let response = ApiError::from(error).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await?;

        assert_eq!(body, r#"{"error":"Unable to send email"}"#);

        Ok(())
    }

    #[test]
    fn test_contact_validation_errors_are_422() {
        let empty_name = ApiError::from(ContactError::EmptyName);
        let empty_message = ApiError::from(ContactError::EmptyMessage);

        assert_eq!(empty_name.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(empty_name.message, "Please provide your name");
        assert_eq!(empty_message.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(empty_message.message, "Please provide a message");
    }

    #[test]
    fn test_newsletter_store_failure_hides_details() {
        let error = NewsletterError::CouldNotStoreSubscription(
            CreateInterestedUserError::UnknownError(anyhow!(
                "relation \"interested_users\" does not exist"
            )),
        );

        let api_error = ApiError::from(error);

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            api_error.message,
            "An unknown error occurred, please try again"
        );
    }
}
