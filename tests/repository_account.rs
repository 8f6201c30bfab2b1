mod common;

use bank_api::domain::entities::NewAccount;
use bank_api::domain::repositories::AccountRepository;
use bank_api::error::AppError;
use bank_api::infrastructure::persistence::PgAccountRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_init_is_idempotent(pool: PgPool) {
    let repo = PgAccountRepository::new(Arc::new(pool));

    repo.init().await.unwrap();
    repo.init().await.unwrap();

    assert!(repo.verify_schema().await.is_ok());
}

#[sqlx::test]
async fn test_verify_schema_detects_drift(pool: PgPool) {
    sqlx::query("ALTER TABLE account ADD COLUMN nickname TEXT")
        .execute(&pool)
        .await
        .unwrap();
    let repo = PgAccountRepository::new(Arc::new(pool));

    let result = repo.verify_schema().await;

    assert!(matches!(result, Err(AppError::SchemaDrift(_))));
}

#[sqlx::test]
async fn test_create_account(pool: PgPool) {
    let repo = PgAccountRepository::new(Arc::new(pool));

    let created = repo
        .create(NewAccount::open("Ada".to_string(), "Lovelace".to_string()))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.first_name, "Ada");
    assert_eq!(created.last_name, "Lovelace");
    assert_eq!(created.balance, 0);
}

#[sqlx::test]
async fn test_create_assigns_unique_ids_and_numbers(pool: PgPool) {
    let repo = PgAccountRepository::new(Arc::new(pool));

    let first = repo
        .create(NewAccount::open("Ada".to_string(), "Lovelace".to_string()))
        .await
        .unwrap();
    let second = repo
        .create(NewAccount::open("Grace".to_string(), "Hopper".to_string()))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_ne!(first.number, second.number);
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let id = common::create_test_account(&pool, "Grace", "Hopper").await;
    let repo = PgAccountRepository::new(Arc::new(pool));

    let account = repo.find_by_id(id).await.unwrap();

    assert_eq!(account.id, id);
    assert_eq!(account.first_name, "Grace");
    assert_eq!(account.last_name, "Hopper");
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgAccountRepository::new(Arc::new(pool));

    let result = repo.find_by_id(999_999).await;

    assert!(matches!(result, Err(AppError::AccountNotFound(999_999))));
}

#[sqlx::test]
async fn test_list_empty(pool: PgPool) {
    let repo = PgAccountRepository::new(Arc::new(pool));

    let accounts = repo.list().await.unwrap();

    assert!(accounts.is_empty());
}

#[sqlx::test]
async fn test_list_accounts(pool: PgPool) {
    for i in 1..=3 {
        common::create_test_account(&pool, &format!("First{i}"), &format!("Last{i}")).await;
    }
    let repo = PgAccountRepository::new(Arc::new(pool));

    let accounts = repo.list().await.unwrap();

    assert_eq!(accounts.len(), 3);
    assert!(accounts.iter().any(|a| a.first_name == "First2"));
}

#[sqlx::test]
async fn test_list_fails_on_undecodable_row(pool: PgPool) {
    sqlx::query("INSERT INTO account (first_name, last_name, created_at) VALUES (NULL, 'X', NOW())")
        .execute(&pool)
        .await
        .unwrap();
    let repo = PgAccountRepository::new(Arc::new(pool));

    let result = repo.list().await;

    assert!(matches!(result, Err(AppError::RowDecode(_))));
}

#[sqlx::test]
async fn test_delete_account(pool: PgPool) {
    let id = common::create_test_account(&pool, "Ada", "Lovelace").await;
    let repo = PgAccountRepository::new(Arc::new(pool));

    repo.delete(id).await.unwrap();

    assert!(matches!(
        repo.find_by_id(id).await,
        Err(AppError::AccountNotFound(_))
    ));
}

#[sqlx::test]
async fn test_delete_missing_account_is_ok(pool: PgPool) {
    let repo = PgAccountRepository::new(Arc::new(pool));

    assert!(repo.delete(424_242).await.is_ok());
}

#[sqlx::test]
async fn test_update_changes_nothing(pool: PgPool) {
    let id = common::create_test_account(&pool, "Ada", "Lovelace").await;
    let repo = PgAccountRepository::new(Arc::new(pool));

    let mut account = repo.find_by_id(id).await.unwrap();
    let before = account.clone();
    account.first_name = "Changed".to_string();
    account.balance = 1_000;

    repo.update(&account).await.unwrap();

    assert_eq!(repo.find_by_id(id).await.unwrap(), before);
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgAccountRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
