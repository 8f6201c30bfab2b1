//! Business logic services for the application layer.

pub mod account_service;

pub use account_service::AccountService;
