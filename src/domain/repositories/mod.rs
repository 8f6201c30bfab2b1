//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are generated via `mockall` for testing.
//!
//! See integration tests in `tests/repository_account.rs` for usage examples.

pub mod account_repository;

pub use account_repository::AccountRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
