use std::error::Error as StdError;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{response::ErrorResponse, store::StoreError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {message}")]
    Validation {
        field: Option<String>,
        message: String,
    },

    #[error("Invalid product id")]
    MalformedIdentifier(String),

    #[error("Product not found")]
    NotFound,

    #[error("Database unavailable")]
    StoreUnavailable,

    #[error("Database error")]
    Store(#[from] StoreError),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation {
            field: rejected_field(&rejection),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation {
            field: rejected_field(&rejection),
            message: rejection.body_text(),
        }
    }
}

/// Path of the value that failed to deserialize, read from the
/// `serde_path_to_error` error axum keeps in the rejection's source chain.
/// Failures at the document root (syntax errors) have no field.
fn rejected_field(rejection: &(dyn StdError + 'static)) -> Option<String> {
    let mut current = Some(rejection);
    while let Some(err) = current {
        if let Some(err) = err.downcast_ref::<serde_path_to_error::Error<serde_json::Error>>() {
            return field_from_path(err.path());
        }
        if let Some(err) = err.downcast_ref::<serde_path_to_error::Error<serde::de::value::Error>>() {
            return field_from_path(err.path());
        }
        current = err.source();
    }
    None
}

fn field_from_path(path: &serde_path_to_error::Path) -> Option<String> {
    if path.iter().next().is_none() {
        return None;
    }
    Some(path.to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, field, detail) = match &self {
            AppError::Validation { field, message } => {
                tracing::info!(field = ?field, "validation failed: {message}");
                (StatusCode::BAD_REQUEST, field.clone(), Some(message.clone()))
            }
            AppError::MalformedIdentifier(raw) => (
                StatusCode::BAD_REQUEST,
                None,
                Some(format!("'{raw}' is not a valid product id")),
            ),
            AppError::NotFound => (StatusCode::NOT_FOUND, None, None),
            AppError::StoreUnavailable => (StatusCode::SERVICE_UNAVAILABLE, None, None),
            AppError::Store(err) => {
                tracing::error!(error = %err, "store call failed");
                (StatusCode::INTERNAL_SERVER_ERROR, None, None)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, None, None)
            }
        };

        let body = ErrorResponse {
            message: self.to_string(),
            field,
            detail,
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
