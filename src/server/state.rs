//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through
//! Axum's state extraction. Both fields are cheap to clone: `DatabaseConnection`
//! is a pool handle and `ApmClient` only carries the application name.

use sea_orm::DatabaseConnection;

use crate::server::observability::ApmClient;

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the bird store.
    pub db: DatabaseConnection,

    /// Direct sender for records that must reach the APM agent immediately.
    pub apm: ApmClient,
}

impl AppState {
    pub fn new(db: DatabaseConnection, apm: ApmClient) -> Self {
        Self { db, apm }
    }
}
