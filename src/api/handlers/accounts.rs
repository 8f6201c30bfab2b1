//! Handlers for account endpoints.

use axum::{Json, extract::State};

use crate::api::dto::account::{AccountResponse, CreateAccountRequest, DeletedResponse};
use crate::api::extract::{AccountId, JsonBody};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all accounts.
///
/// # Endpoint
///
/// `GET /account`
pub async fn list_accounts_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let accounts = state.account_service.list_accounts().await?;

    Ok(Json(
        accounts.into_iter().map(AccountResponse::from).collect(),
    ))
}

/// Creates a new account.
///
/// # Endpoint
///
/// `POST /account`
///
/// # Request Body
///
/// ```json
/// { "firstName": "Ada", "lastName": "Lovelace" }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is not valid JSON or the insert fails.
pub async fn create_account_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateAccountRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = state
        .account_service
        .open_account(payload.first_name, payload.last_name)
        .await?;

    Ok(Json(account.into()))
}

/// Fetches one account.
///
/// # Endpoint
///
/// `GET /account/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer or no account has that id.
pub async fn get_account_handler(
    AccountId(id): AccountId,
    State(state): State<AppState>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = state.account_service.get_account(id).await?;

    Ok(Json(account.into()))
}

/// Deletes an account.
///
/// # Endpoint
///
/// `DELETE /account/{id}`
///
/// Deleting an id that does not exist still returns `{"deleted": id}`.
///
/// # Errors
///
/// Returns 400 if `id` is not an integer or the statement fails.
pub async fn delete_account_handler(
    AccountId(id): AccountId,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    state.account_service.close_account(id).await?;

    Ok(Json(DeletedResponse { deleted: id }))
}
