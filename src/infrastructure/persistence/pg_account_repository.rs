//! PostgreSQL implementation of account repository.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};
use std::sync::Arc;
use tracing::instrument;

use crate::domain::entities::{Account, NewAccount};
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;

/// Embedded schema migrations from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Columns of the `account` table in the order rows are decoded.
pub const ACCOUNT_COLUMNS: [&str; 6] = [
    "id",
    "first_name",
    "last_name",
    "number",
    "balance",
    "created_at",
];

/// `ACCOUNT_COLUMNS` joined for use in SQL. Kept in sync by a unit test.
const SELECT_COLUMNS: &str = "id, first_name, last_name, number, balance, created_at";

/// Raw `account` row, decoded by position following [`ACCOUNT_COLUMNS`].
#[derive(Debug)]
struct AccountRow {
    id: i32,
    first_name: String,
    last_name: String,
    number: i32,
    balance: i32,
    created_at: NaiveDateTime,
}

impl<'r> FromRow<'r, PgRow> for AccountRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        if row.len() != ACCOUNT_COLUMNS.len() {
            return Err(sqlx::Error::ColumnIndexOutOfBounds {
                index: ACCOUNT_COLUMNS.len() - 1,
                len: row.len(),
            });
        }

        Ok(Self {
            id: row.try_get(0)?,
            first_name: row.try_get(1)?,
            last_name: row.try_get(2)?,
            number: row.try_get(3)?,
            balance: row.try_get(4)?,
            created_at: row.try_get(5)?,
        })
    }
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account::new(
            row.id,
            row.first_name,
            row.last_name,
            row.number,
            row.balance,
            row.created_at.and_utc(),
        )
    }
}

/// PostgreSQL repository for accounts.
///
/// Statements run directly on the pool; no explicit transactions are used.
pub struct PgAccountRepository {
    pool: Arc<PgPool>,
}

impl PgAccountRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    #[instrument(skip(self))]
    async fn init(&self) -> Result<(), AppError> {
        MIGRATOR
            .run(self.pool.as_ref())
            .await
            .map_err(|e| AppError::Database(sqlx::Error::Migrate(Box::new(e))))?;

        tracing::debug!("account table ready");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn verify_schema(&self) -> Result<(), AppError> {
        let found = sqlx::query_scalar::<_, String>(
            r#"
            SELECT column_name::TEXT
            FROM information_schema.columns
            WHERE table_schema = current_schema()
              AND table_name = 'account'
            ORDER BY ordinal_position
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        if found.iter().map(String::as_str).ne(ACCOUNT_COLUMNS) {
            return Err(AppError::SchemaDrift(format!(
                "expected columns [{}], found [{}]",
                ACCOUNT_COLUMNS.join(", "),
                found.join(", ")
            )));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError> {
        let query = format!(
            r#"
            INSERT INTO account (first_name, last_name, balance, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING {SELECT_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, AccountRow>(&query)
            .bind(&new_account.first_name)
            .bind(&new_account.last_name)
            .bind(new_account.balance)
            .bind(new_account.created_at.naive_utc())
            .fetch_one(self.pool.as_ref())
            .await?;

        tracing::info!(id = row.id, number = row.number, "account created");
        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM account WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        tracing::info!(id, rows = result.rows_affected(), "account deleted");
        Ok(())
    }

    #[instrument(skip(self, account), fields(id = account.id))]
    async fn update(&self, account: &Account) -> Result<(), AppError> {
        tracing::debug!("account update is a no-op");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Account>, AppError> {
        let rows =
            sqlx::query_as::<_, AccountRow>(&format!("SELECT {SELECT_COLUMNS} FROM account"))
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows.into_iter().map(Account::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> Result<Account, AppError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM account WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Account::from).ok_or(AppError::AccountNotFound(id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;

        Ok(())
    }
}
