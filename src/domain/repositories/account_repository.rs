//! Repository trait for account data access.

use crate::domain::entities::{Account, NewAccount};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAccountRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Creates the account table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the schema cannot be applied.
    async fn init(&self) -> Result<(), AppError>;

    /// Checks that the stored table's columns match the decode order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SchemaDrift`] if columns are missing, extra or reordered.
    async fn verify_schema(&self) -> Result<(), AppError>;

    /// Inserts a new account and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the insert fails.
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError>;

    /// Deletes the account with the given id.
    ///
    /// Deleting an id that does not exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the statement fails.
    async fn delete(&self, id: i32) -> Result<(), AppError>;

    /// Declared for completeness; performs no mutation and always succeeds.
    async fn update(&self, account: &Account) -> Result<(), AppError>;

    /// Returns every account in storage order. An empty table yields an empty vec.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RowDecode`] if a row cannot be decoded.
    /// Returns [`AppError::Database`] on query failure.
    async fn list(&self) -> Result<Vec<Account>, AppError>;

    /// Finds a single account by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AccountNotFound`] if no row matches.
    /// Returns [`AppError::Database`] on query failure.
    async fn find_by_id(&self, id: i32) -> Result<Account, AppError>;

    /// Round-trips a trivial query to check connectivity.
    async fn ping(&self) -> Result<(), AppError>;
}
