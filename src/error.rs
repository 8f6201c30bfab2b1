//! Application error type and its HTTP representation.
//!
//! Every handler returns [`AppError`] on failure. The [`IntoResponse`] impl is the
//! single place where errors become HTTP responses: all of them are reported as
//! `400 Bad Request` with a `{"error": "<message>"}` body.

use axum::{
    Json,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON error envelope written for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("method {0} not supported")]
    MethodNotSupported(Method),

    #[error("invalid id given {0}")]
    InvalidId(String),

    #[error("{0}")]
    InvalidBody(String),

    #[error("account {0} not found")]
    AccountNotFound(i32),

    #[error("error scanning row: {0}")]
    RowDecode(#[source] sqlx::Error),

    #[error("account table does not match the expected layout: {0}")]
    SchemaDrift(String),

    #[error(transparent)]
    Database(sqlx::Error),
}

impl AppError {
    /// Status code used for the response.
    ///
    /// Client and server failures are not distinguished.
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            AppError::RowDecode(_) | AppError::SchemaDrift(_) | AppError::Database(_)
        )
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_) => AppError::RowDecode(e),
            other => AppError::Database(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_storage_failure() {
            tracing::error!(error = %self, "storage operation failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}
