//! DTOs for the transfer endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Transfer payload accepted by `POST /transfer`.
///
/// Any JSON object is accepted. Members are never validated, persisted or
/// applied to balances, and the object is echoed back unchanged, `null`
/// members and key order included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct TransferRequest(pub Map<String, Value>);

impl TransferRequest {
    pub fn from_account(&self) -> Option<&Value> {
        self.0.get("fromAccount")
    }

    pub fn to_account(&self) -> Option<&Value> {
        self.0.get("toAccount")
    }

    pub fn amount(&self) -> Option<&Value> {
        self.0.get("amount")
    }
}
