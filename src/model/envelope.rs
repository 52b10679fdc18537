//! Uniform response envelope returned by every record operation.
//!
//! Each operation result is classified as an [`Outcome`], which fixes both the `error` flag
//! and the HTTP status code written to the client. Soft not-found results keep a success
//! status (200) and are told apart from hard failures (500) only by status code, so clients
//! branch on `error` rather than on `statusCode` to detect a missing record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Classification of an operation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A page of records was read.
    Listed,
    /// A single record (or a projection of it) was read.
    Found,
    /// A record was inserted.
    Created,
    /// A record was updated.
    Updated,
    /// A record was removed.
    Deleted,
    /// The requested record is absent. Reported with a success status.
    NotFound,
    /// The store rejected the call or did not produce the expected record.
    Failed,
}

impl Outcome {
    /// HTTP status code emitted for this outcome.
    pub fn status_code(self) -> u16 {
        match self {
            Self::Listed | Self::Found | Self::NotFound => 200,
            Self::Created => 201,
            Self::Updated | Self::Deleted => 202,
            Self::Failed => 500,
        }
    }

    /// Whether the outcome leaves the envelope without usable data.
    pub fn is_error(self) -> bool {
        matches!(self, Self::NotFound | Self::Failed)
    }
}

/// Response envelope mirrored as the HTTP response body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub error: bool,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl<T> Envelope<T> {
    /// Builds an envelope for `outcome` carrying `data`.
    ///
    /// Error outcomes never carry data, so a payload passed alongside one is dropped.
    pub fn build(outcome: Outcome, data: Option<T>) -> Self {
        let data = if outcome.is_error() { None } else { data };

        Self {
            error: outcome.is_error(),
            status_code: outcome.status_code(),
            data,
            message: None,
            errors: None,
            total: None,
        }
    }

    /// Successful envelope with a payload.
    pub fn success(outcome: Outcome, data: T) -> Self {
        Self::build(outcome, Some(data))
    }

    /// Soft not-found envelope: `error=true` with a 200 status.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::build(Outcome::NotFound, None).with_message(message)
    }

    /// Hard failure envelope with a 500 status and the underlying failure detail.
    pub fn failure(errors: impl ToString) -> Self {
        let mut envelope = Self::build(Outcome::Failed, None);
        envelope.errors = Some(errors.to_string());
        envelope
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// Transforms the payload while keeping status, flags and notes.
    pub fn map<U, F>(self, f: F) -> Envelope<U>
    where
        F: FnOnce(T) -> U,
    {
        Envelope {
            error: self.error,
            status_code: self.status_code,
            data: self.data.map(f),
            message: self.message,
            errors: self.errors,
            total: self.total,
        }
    }
}
