//! Handler for the transfer endpoint.

use axum::Json;

use crate::api::dto::transfer::TransferRequest;
use crate::api::extract::JsonBody;

/// Accepts a transfer request and echoes it back.
///
/// # Endpoint
///
/// `POST /transfer`
///
/// Nothing is persisted and no balance changes. Any payload that decodes is
/// returned unchanged with 200.
///
/// # Errors
///
/// Returns 400 if the body is not valid JSON or not a JSON object.
pub async fn transfer_handler(JsonBody(payload): JsonBody<TransferRequest>) -> Json<TransferRequest> {
    tracing::info!(
        from = ?payload.from_account(),
        to = ?payload.to_account(),
        amount = ?payload.amount(),
        "transfer accepted (not applied)"
    );

    Json(payload)
}
