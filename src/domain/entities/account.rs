//! Domain entity representing a bank account.

use chrono::{DateTime, Utc};

/// Balance every account is opened with.
pub const OPENING_BALANCE: i32 = 0;

/// A bank account as stored in the `account` table.
///
/// `id` and `number` are assigned by storage and are unique across accounts.
/// `balance` is never changed by any exposed operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub number: i32,
    pub balance: i32,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(
        id: i32,
        first_name: String,
        last_name: String,
        number: i32,
        balance: i32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            number,
            balance,
            created_at,
        }
    }
}

/// Input data for creating a new account.
///
/// `id` and `number` are left to storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub balance: i32,
    pub created_at: DateTime<Utc>,
}

impl NewAccount {
    /// Builds an account opened now with [`OPENING_BALANCE`].
    pub fn open(first_name: String, last_name: String) -> Self {
        Self {
            first_name,
            last_name,
            balance: OPENING_BALANCE,
            created_at: Utc::now(),
        }
    }
}
