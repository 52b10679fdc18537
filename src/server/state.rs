//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::error::reporter::{ErrorReporter, TracingErrorReporter};

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a connection pool whose clones
/// share the pool, and the reporter is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Receives failures that controllers do not turn into envelopes themselves.
    pub error_reporter: Arc<dyn ErrorReporter>,
}

impl AppState {
    /// Creates a new application state that reports failures through `tracing`.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_reporter(db, Arc::new(TracingErrorReporter))
    }

    /// Creates a new application state with a custom error reporter.
    pub fn with_reporter(db: DatabaseConnection, error_reporter: Arc<dyn ErrorReporter>) -> Self {
        Self { db, error_reporter }
    }
}
