//! Contact form handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::{
        communication::email_addresses::EmailAddress,
        contact::{ContactMessage, ContactService},
        newsletter::NewsletterService,
    },
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        state::AppState,
    },
};

/// Contact form request body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactBody {
    /// The visitor's name
    #[schema(example = "Ann")]
    name: String,

    /// The visitor's email address, which receives the confirmation
    #[schema(example = "email@example.com")]
    email: String,

    /// The message for the team
    #[schema(example = "Can I start a loop in my neighbourhood?")]
    message: String,
}

impl TryFrom<ContactBody> for ContactMessage {
    type Error = ApiError;

    fn try_from(body: ContactBody) -> Result<Self, Self::Error> {
        Ok(ContactMessage::new(
            &body.name,
            EmailAddress::new(&body.email)?,
            &body.message,
        )?)
    }
}

/// Contact form response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    success: bool,
}

/// Send a contact form message to the team
#[utoipa::path(
    post,
    operation_id = "send_contact_message",
    tag = "Contact",
    path = "/api/v1/contact",
    request_body = ContactBody,
    responses(
        (status = 200, description = "Message forwarded and confirmation sent", body = ContactResponse),
        (status = 422, description = "Unprocessable entity", body = ErrorResponse, example = json!({ "error": "Please provide a valid email address" })),
        (status = 500, description = "Email could not be sent", body = ErrorResponse, example = json!({ "error": "Unable to send email" })),
    )
)]
pub async fn handler<C: ContactService, N: NewsletterService>(
    State(state): State<AppState<C, N>>,
    request: Result<Json<ContactBody>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(request) = request?;

    let message: ContactMessage = request.try_into()?;

    state.contact.send_contact_message(&message).await?;

    Ok(Json(ContactResponse { success: true }))
}
