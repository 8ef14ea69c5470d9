use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    domain::{contact::ContactService, newsletter::NewsletterService},
    infrastructure::http::{open_api::ApiDocs, state::AppState},
};

pub mod contact;
pub mod newsletter;
pub mod stoplight;
pub mod uptime;

pub fn router<C: ContactService, N: NewsletterService>() -> Router<AppState<C, N>> {
    Router::new()
        .route("/", get(stoplight::handler))
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/uptime", get(uptime::handler))
        .route("/contact", post(contact::handler))
        .route("/newsletter", post(newsletter::handler))
}
