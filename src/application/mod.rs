//! Application layer services.
//!
//! Services consume repository traits and provide a small API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::account_service::AccountService`] - Account lifecycle

pub mod services;
