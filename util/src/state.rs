//! Application state container shared across Axum route handlers.
//!
//! Holds the single shared database connection handle. It is cloned into each
//! route group via Axum's `State<T>` extractor; owning the connection here
//! (instead of a process-wide global) keeps teardown deterministic and lets
//! tests inject an in-memory database.

use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` with the given database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
