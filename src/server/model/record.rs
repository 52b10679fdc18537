//! Record domain model and mutation parameters.
//!
//! A record is a JSON object body plus the store-managed identifier and timestamps. Bodies
//! coming from clients are cleaned of the store-managed keys before they reach the
//! repository, and updates are split into a field overwrite and an optional history append.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde_json::{Map, Value};
use std::fmt;

use crate::{model::record::RecordDto, server::model::collection::Collection};

/// Body key carrying the record identifier on the wire and in filters.
pub const ID_FIELD: &str = "_id";

/// Keys managed by the store that clients can never write.
pub const RESERVED_FIELDS: [&str; 3] = [ID_FIELD, "createdAt", "updatedAt"];

/// Store-assigned record identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(pub i32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored record of any collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: RecordId,
    pub fields: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Record)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - The stored body is not a JSON object
    pub fn from_entity(entity: entity::document::Model) -> Result<Self, DbErr> {
        match entity.body {
            Value::Object(fields) => Ok(Self {
                id: RecordId(entity.id),
                fields,
                created_at: entity.created_at,
                updated_at: entity.updated_at,
            }),
            other => Err(DbErr::Custom(format!(
                "Document {} body is not a JSON object: {}",
                entity.id, other
            ))),
        }
    }

    /// Projects an array field. A missing or non-array field projects as empty.
    pub fn history(&self, field: &str) -> Vec<Value> {
        match self.fields.get(field) {
            Some(Value::Array(entries)) => entries.clone(),
            _ => Vec::new(),
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> RecordDto {
        RecordDto {
            id: self.id.0,
            fields: self.fields.into_iter().collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn strip_reserved(mut body: Map<String, Value>) -> Map<String, Value> {
    for key in RESERVED_FIELDS {
        body.remove(key);
    }
    body
}

/// Fields of a record about to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRecordParams {
    pub fields: Map<String, Value>,
}

impl CreateRecordParams {
    /// Builds insert parameters from a client body.
    ///
    /// Store-managed keys are dropped and a collection with a history field starts with an
    /// empty history when the body does not provide one.
    pub fn from_body<C: Collection>(body: Map<String, Value>) -> Self {
        let mut fields = strip_reserved(body);

        if let Some(history_field) = C::HISTORY_FIELD {
            fields
                .entry(history_field)
                .or_insert_with(|| Value::Array(Vec::new()));
        }

        Self { fields }
    }
}

/// Entry pushed onto a history array by an update.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryAppend {
    pub field: &'static str,
    pub entry: Value,
}

/// Mutation applied by an update: overwrite `set` fields, then push `append` if any.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRecordParams {
    pub id: RecordId,
    pub set: Map<String, Value>,
    pub append: Option<HistoryAppend>,
}

impl UpdateRecordParams {
    /// Splits a client body into the field overwrite and the history append.
    ///
    /// For a collection with a history field, the field's value is always appended as a
    /// single entry; when it is absent or null an empty array is appended instead.
    pub fn from_body<C: Collection>(id: RecordId, body: Map<String, Value>) -> Self {
        let mut set = strip_reserved(body);

        let append = C::HISTORY_FIELD.map(|field| {
            let entry = match set.remove(field) {
                Some(Value::Null) | None => Value::Array(Vec::new()),
                Some(value) => value,
            };
            HistoryAppend { field, entry }
        });

        Self { id, set, append }
    }
}
