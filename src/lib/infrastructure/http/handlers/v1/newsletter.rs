//! Newsletter subscription handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::{
        communication::email_addresses::EmailAddress,
        contact::ContactService,
        newsletter::{NewsletterService, Subscription},
    },
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        state::AppState,
    },
};

/// Newsletter subscription request body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NewsletterBody {
    /// The subscriber's name
    #[schema(example = "Ann")]
    name: String,

    /// The subscriber's email address
    #[schema(example = "email@example.com")]
    email: String,
}

impl TryFrom<NewsletterBody> for Subscription {
    type Error = ApiError;

    fn try_from(body: NewsletterBody) -> Result<Self, Self::Error> {
        Ok(Subscription::new(&body.name, EmailAddress::new(&body.email)?)?)
    }
}

/// Newsletter subscription response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewsletterResponse {
    success: bool,
}

/// Subscribe to the newsletter
#[utoipa::path(
    post,
    operation_id = "subscribe_to_newsletter",
    tag = "Newsletter",
    path = "/api/v1/newsletter",
    request_body = NewsletterBody,
    responses(
        (status = 200, description = "Subscription stored and confirmation sent", body = NewsletterResponse),
        (status = 422, description = "Unprocessable entity", body = ErrorResponse, example = json!({ "error": "Please provide your name" })),
        (status = 500, description = "Email could not be sent", body = ErrorResponse, example = json!({ "error": "Unable to send email" })),
    )
)]
pub async fn handler<C: ContactService, N: NewsletterService>(
    State(state): State<AppState<C, N>>,
    request: Result<Json<NewsletterBody>, JsonRejection>,
) -> Result<Json<NewsletterResponse>, ApiError> {
    let Json(request) = request?;

    let subscription: Subscription = request.try_into()?;

    state.newsletter.subscribe(&subscription).await?;

    Ok(Json(NewsletterResponse { success: true }))
}
