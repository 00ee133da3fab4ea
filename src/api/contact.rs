//! Contact endpoint.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::{AppError, MessageResponse};
use crate::models::ContactMessage;
use crate::AppState;

/// Message returned once the email is sent and the record saved.
pub const SUCCESS_MESSAGE: &str = "Email sent and data saved successfully";

/// /api/contact - Accept a contact form submission.
///
/// Only POST is accepted; any other method gets 405 with an `Allow` header.
pub async fn handle_contact(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Response, AppError> {
    if method != Method::POST {
        return Ok(method_not_allowed(&method));
    }

    let message: ContactMessage = serde_json::from_slice(&body)?;
    state.contact.submit(&message).await?;

    Ok((StatusCode::OK, Json(MessageResponse::new(SUCCESS_MESSAGE))).into_response())
}

fn method_not_allowed(method: &Method) -> Response {
    tracing::debug!(%method, "Rejected contact request method");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        format!("Method {} Not Allowed", method),
    )
        .into_response()
}
