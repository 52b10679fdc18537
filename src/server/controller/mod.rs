//! HTTP request adapters.
//!
//! Controllers extract the path, query and body, call the record services and mirror the
//! returned envelope as the response body with its `statusCode` as the HTTP status. Failures
//! returned as errors, including rejected query strings and bodies, are handed to the
//! `ErrorReporter` held in `AppState`.

pub mod account;
pub mod device;


use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::{
    model::{envelope::Envelope, record::RecordDto},
    server::{error::AppError, model::record::Record, state::AppState},
};

/// Raw query string as extracted, before normalization.
pub type RawQuery = Result<Query<HashMap<String, String>>, QueryRejection>;

/// Raw JSON object body as extracted.
pub type RawBody = Result<Json<Map<String, Value>>, JsonRejection>;

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}

/// Writes an envelope, or forwards the failure to the application's error reporter.
pub fn respond<T: Serialize>(state: &AppState, result: Result<Envelope<T>, AppError>) -> Response {
    match result {
        Ok(envelope) => envelope.into_response(),
        Err(err) => state.error_reporter.report(err),
    }
}

/// Unwraps an extracted query string, mapping a rejection to a bad request.
pub(crate) fn query_params(query: RawQuery) -> Result<HashMap<String, String>, AppError> {
    query
        .map(|Query(raw)| raw)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Unwraps an extracted JSON object body, mapping a rejection to a bad request.
pub(crate) fn json_body(body: RawBody) -> Result<Map<String, Value>, AppError> {
    body.map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

pub(crate) fn record_envelope(envelope: Envelope<Record>) -> Envelope<RecordDto> {
    envelope.map(Record::into_dto)
}

pub(crate) fn records_envelope(envelope: Envelope<Vec<Record>>) -> Envelope<Vec<RecordDto>> {
    envelope.map(|records| records.into_iter().map(Record::into_dto).collect())
}
