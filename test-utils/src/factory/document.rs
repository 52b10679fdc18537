//! Document factory for creating stored records of any collection.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{Map, Value};

use crate::factory::helpers::next_id;

/// Factory for creating test documents with customizable body and timestamps.
///
/// # Example
///
/// ```rust,ignore
/// let device = DocumentFactory::new(&db, "device")
///     .field("name", "Pump 7")
///     .field("patient_id", "p-1")
///     .build()
///     .await?;
/// ```
pub struct DocumentFactory<'a> {
    db: &'a DatabaseConnection,
    collection: String,
    body: Map<String, Value>,
    created_at: DateTime<Utc>,
}

impl<'a> DocumentFactory<'a> {
    /// Creates a new DocumentFactory with default values.
    ///
    /// Defaults:
    /// - body: `{"name": "Record {id}"}` where id is auto-incremented
    /// - created_at / updated_at: now
    pub fn new(db: &'a DatabaseConnection, collection: impl Into<String>) -> Self {
        let id = next_id();
        let mut body = Map::new();
        body.insert("name".to_string(), Value::String(format!("Record {}", id)));

        Self {
            db,
            collection: collection.into(),
            body,
            created_at: Utc::now(),
        }
    }

    /// Sets a single body field, replacing any previous value.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body.insert(key.into(), value.into());
        self
    }

    /// Replaces the whole body.
    pub fn body(mut self, body: Map<String, Value>) -> Self {
        self.body = body;
        self
    }

    /// Sets both timestamps, used to control listing order.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the document into the database.
    ///
    /// # Returns
    /// - `Ok(entity::document::Model)` - Created document row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        entity::document::ActiveModel {
            id: ActiveValue::NotSet,
            collection: ActiveValue::Set(self.collection),
            body: ActiveValue::Set(Value::Object(self.body)),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an account with default values.
pub async fn create_account(db: &DatabaseConnection) -> Result<entity::document::Model, DbErr> {
    DocumentFactory::new(db, "account").build().await
}

/// Creates a device with an empty usage history.
pub async fn create_device(db: &DatabaseConnection) -> Result<entity::document::Model, DbErr> {
    DocumentFactory::new(db, "device")
        .field("deviceUsingHistory", Value::Array(Vec::new()))
        .build()
        .await
}
