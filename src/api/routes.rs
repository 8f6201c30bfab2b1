//! API route configuration.

use crate::api::handlers::{
    create_account_handler, delete_account_handler, get_account_handler, list_accounts_handler,
    method_not_supported_handler, transfer_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Account and transfer routes.
///
/// # Endpoints
///
/// - `GET    /account`       - List all accounts
/// - `POST   /account`       - Create an account
/// - `GET    /account/{id}`  - Fetch one account
/// - `DELETE /account/{id}`  - Delete an account
/// - `POST   /transfer`      - Echo a transfer request
///
/// Any other method on these paths is answered with a 400 error envelope.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/account",
            get(list_accounts_handler)
                .post(create_account_handler)
                .fallback(method_not_supported_handler),
        )
        .route(
            "/account/{id}",
            get(get_account_handler)
                .delete(delete_account_handler)
                .fallback(method_not_supported_handler),
        )
        .route(
            "/transfer",
            post(transfer_handler).fallback(method_not_supported_handler),
        )
}
