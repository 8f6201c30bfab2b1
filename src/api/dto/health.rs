//! Body of `GET /health`.

use serde::Serialize;

/// Service liveness plus the outcome of a `SELECT 1` against PostgreSQL.
///
/// `status` is `"healthy"` when the database answered, `"degraded"` otherwise.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// The only dependency checked is the account database.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// `"ok"` or `"error"`; `message` carries the storage error when the ping failed.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
