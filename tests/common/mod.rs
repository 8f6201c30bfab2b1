#![allow(dead_code)]

use axum_test::TestServer;
use bank_api::application::services::AccountService;
use bank_api::infrastructure::persistence::PgAccountRepository;
use bank_api::routes::api_router;
use bank_api::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_account(pool: &PgPool, first_name: &str, last_name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO account (first_name, last_name, balance, created_at) VALUES ($1, $2, 0, NOW()) RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgAccountRepository::new(Arc::new(pool)));
    AppState::new(Arc::new(AccountService::new(repository)))
}

pub fn create_test_server(pool: PgPool) -> TestServer {
    TestServer::new(api_router(create_test_state(pool))).unwrap()
}
