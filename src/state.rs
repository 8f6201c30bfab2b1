//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::AccountService;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
}

impl AppState {
    pub fn new(account_service: Arc<AccountService>) -> Self {
        Self { account_service }
    }
}
