use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::models::Message;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Butterfly not found: {0}")]
    NotFound(String),

    #[error("Not enough butterflies in database: {0} found, 5 needed")]
    InsufficientData(usize),

    #[error("Invalid butterfly: {0} must not be empty")]
    Validation(&'static str),

    #[error("Store error: {0}")]
    Infra(#[from] redis::RedisError),

    #[error("Malformed stored document: {0}")]
    MalformedDocument(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InsufficientData { .. } | AppError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::Infra { .. } | AppError::MalformedDocument { .. } => {
                error!("{self}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(Message::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::AppError;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("7".into()), StatusCode::NOT_FOUND),
            (AppError::InsufficientData(3), StatusCode::BAD_REQUEST),
            (AppError::Validation("commonName"), StatusCode::BAD_REQUEST),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_malformed_document_is_internal() {
        let serde_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let response = AppError::from(serde_err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
