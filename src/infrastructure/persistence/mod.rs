//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgAccountRepository`] - Account storage and retrieval

pub mod pg_account_repository;

pub use pg_account_repository::{ACCOUNT_COLUMNS, MIGRATOR, PgAccountRepository};
