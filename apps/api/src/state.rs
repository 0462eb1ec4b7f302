//! Shared application state.
//!
//! One instance per process in production; one instance per test case in the
//! integration suite, so collections never leak between tests.

use std::sync::Arc;

use cantina_store::{MenuRepository, OrderRepository};

use crate::config::{ApiConfig, Credentials};

/// Everything the handlers need: the two repositories and the credential
/// pair for the auth gate.
pub struct AppState {
    pub menu: MenuRepository,
    pub orders: OrderRepository,
    pub credentials: Credentials,
}

impl AppState {
    /// Builds fresh, empty state from configuration.
    pub fn new(config: &ApiConfig) -> Arc<Self> {
        Arc::new(AppState {
            menu: MenuRepository::new(),
            orders: OrderRepository::new(),
            credentials: config.credentials.clone(),
        })
    }

    /// Empties both collections. Test isolation only.
    pub fn clear(&self) {
        self.menu.clear();
        self.orders.clear();
    }
}
