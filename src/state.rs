use std::sync::Arc;

use crate::storage::Store;

/// Shared application state injected into all handlers.
///
/// Exactly one [`Store`] exists per process (or per test server); handlers
/// receive it by reference through this cloneable state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

impl AppState {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}
