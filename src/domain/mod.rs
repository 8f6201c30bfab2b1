//! Domain layer containing the account model and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP or persistence layers.
//! [`repositories::AccountRepository`] is implemented by
//! [`crate::infrastructure::persistence::PgAccountRepository`].

pub mod entities;
pub mod repositories;
