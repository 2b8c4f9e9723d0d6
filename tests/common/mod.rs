#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;

use course_registry::routes::router;
use course_registry::state::AppState;
use course_registry::storage::Store;

/// Builds a test server over the full route tree, backed by a freshly seeded
/// store. Each test gets its own store, so no cross-test state leaks.
pub fn make_server() -> TestServer {
    let store = Arc::new(Store::new());
    store.seed().unwrap();

    let app = router(AppState::new(store));
    TestServer::new(app).unwrap()
}

/// Builds a test server over an empty, unseeded store.
pub fn make_empty_server() -> TestServer {
    let store = Arc::new(Store::new());

    let app = router(AppState::new(store));
    TestServer::new(app).unwrap()
}
