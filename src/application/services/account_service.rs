//! Account lifecycle service.

use crate::domain::entities::{Account, NewAccount};
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for opening, reading and closing accounts.
///
/// Holds the storage as a trait object so handlers can be exercised against a
/// stub repository. Balances are never debited or credited here.
pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }

    /// Opens an account for the given holder.
    ///
    /// The creation timestamp and opening balance are set here; `id` and
    /// `number` are assigned by storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the insert fails.
    pub async fn open_account(
        &self,
        first_name: String,
        last_name: String,
    ) -> Result<Account, AppError> {
        let new_account = NewAccount::open(first_name, last_name);
        self.repository.create(new_account).await
    }

    /// Lists all accounts.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, AppError> {
        self.repository.list().await
    }

    /// Retrieves an account by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AccountNotFound`] if the account does not exist.
    pub async fn get_account(&self, id: i32) -> Result<Account, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Closes an account. Unknown ids are accepted.
    pub async fn close_account(&self, id: i32) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    /// Checks that storage is reachable.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
