//! Handler for methods a route does not support.

use axum::http::Method;

use crate::error::AppError;

/// Rejects a request whose path matched but whose method did not.
///
/// Reported through the usual error envelope (400) rather than as 405.
pub async fn method_not_supported_handler(method: Method) -> AppError {
    AppError::MethodNotSupported(method)
}
