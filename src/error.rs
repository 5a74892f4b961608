//! Typed errors and HTTP mapping. Every failure leaves a handler through here.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// SQLSTATE for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Conflict(String),
    #[error("database: {0}")]
    Db(sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return AppError::Conflict(db.message().to_string());
            }
        }
        AppError::Db(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Field-level validation messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Vec<String>>,
}

impl ErrorBody {
    pub fn from_error(err: &AppError) -> Self {
        let status = err.status().as_u16();
        match err {
            AppError::Validation(messages) => ErrorBody {
                error: ErrorDetail {
                    status,
                    message: None,
                    error: Some(messages.clone()),
                },
                message: None,
            },
            // Store internals stay in the log.
            AppError::Db(e) if status == 500 => {
                tracing::error!(error = %e, "database error");
                let message = "Internal Server Error".to_string();
                ErrorBody {
                    error: ErrorDetail {
                        status,
                        message: Some(message.clone()),
                        error: None,
                    },
                    message: Some(message),
                }
            }
            other => {
                let message = other.to_string();
                ErrorBody {
                    error: ErrorDetail {
                        status,
                        message: Some(message.clone()),
                        error: None,
                    },
                    message: Some(message),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody::from_error(&self);
        (self.status(), Json(body)).into_response()
    }
}
