//! Core domain entities.
//!
//! - [`Account`] - A stored bank account
//! - [`NewAccount`] - Input for creating an account

pub mod account;

pub use account::{Account, NewAccount};
