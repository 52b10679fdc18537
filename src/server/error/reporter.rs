//! Error channel for failures the request adapters do not handle themselves.
//!
//! Controllers only mirror envelopes. Anything returned as an `Err` (validation failures
//! while listing, store failures while deleting, rejected request bodies) is handed to the
//! `ErrorReporter` held in the application state, which decides the final response.

use axum::response::{IntoResponse, Response};

use crate::server::error::AppError;

/// Receives failures raised while handling a request and renders them.
pub trait ErrorReporter: Send + Sync {
    /// Converts the failure into the response written to the client.
    fn report(&self, err: AppError) -> Response;
}

/// Default reporter: logs the failure and falls back to `AppError`'s own response mapping.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, err: AppError) -> Response {
        tracing::debug!("Reporting request failure: {:?}", err);

        err.into_response()
    }
}
