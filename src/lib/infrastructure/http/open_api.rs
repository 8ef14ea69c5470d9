//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::ErrorResponse, handlers::v1::*};

#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Loop Mailer"),
    paths(contact::handler, newsletter::handler, uptime::handler),
    components(schemas(
        contact::ContactBody,
        contact::ContactResponse,
        newsletter::NewsletterBody,
        newsletter::NewsletterResponse,
        uptime::UptimeResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;
