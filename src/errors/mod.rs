//! Error handling module for the portfolio backend.
//!
//! Provides the server error type with mapping to HTTP status codes and the
//! `{ message }` response envelope the contact form expects.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Message returned for every internal failure. Details stay in the logs.
pub const GENERIC_ERROR_MESSAGE: &str = "Error processing request";

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Request body is malformed or misses required fields
    Validation(String),
    /// Mail relay rejected or failed the dispatch
    Mail(String),
    /// Database error
    Database(String),
    /// Bad request
    BadRequest(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Mail(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the internal error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Mail(msg) => msg.clone(),
            AppError::Database(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
        }
    }

    /// Message safe to show to the caller.
    ///
    /// Client mistakes are echoed back, server-side failures are opaque.
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            self.message()
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.status_code())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Mail relay error: {:?}", err);
        AppError::Mail(format!("Mail relay error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::warn!("JSON error: {:?}", err);
        AppError::BadRequest(format!("JSON error: {}", err))
    }
}

/// Response envelope shared by success and error replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = MessageResponse::new(self.public_message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_opaque() {
        let err = AppError::Mail("relay returned 502".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), GENERIC_ERROR_MESSAGE);

        let err = AppError::Database("disk full".to_string());
        assert_eq!(err.public_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_client_errors_are_echoed() {
        let err = AppError::Validation("Message is required".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Message is required");
    }

    #[test]
    fn test_json_error_maps_to_bad_request() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::from(parse_err);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
