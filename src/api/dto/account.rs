//! DTOs for account endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Account;

/// Body of `POST /account`. Missing names decode as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateAccountRequest {
    pub first_name: String,
    pub last_name: String,
}

/// JSON representation of an account.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub number: i32,
    pub balance: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            first_name: a.first_name,
            last_name: a.last_name,
            number: a.number,
            balance: a.balance,
            created_at: a.created_at,
        }
    }
}

/// Acknowledgment returned by `DELETE /account/{id}`.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: i32,
}
