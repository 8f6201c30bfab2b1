//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization. Request bodies are decoded only;
//! no further validation is applied.

pub mod account;
pub mod health;
pub mod transfer;
