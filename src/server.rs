//! HTTP server initialization and runtime setup.
//!
//! Handles store construction and seeding, and the Axum server lifecycle.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;
use crate::storage::Store;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The in-memory registry store, seeded with the initial dataset
/// - The Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Seeding fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(Store::new());
    store.seed()?;
    tracing::info!("Store seeded with initial dataset");

    let state = AppState::new(store);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
