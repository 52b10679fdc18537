//! Document data repository for record storage.
//!
//! This module provides the `DocumentRepository` for reading and writing records of one
//! collection. Domain fields are stored as a JSON object in the `body` column and are
//! matched and ordered through SQLite's `json_extract`. Entity models are converted to
//! `Record` domain models at this boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, IntoActiveModel, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, TransactionTrait, Value,
};
use serde_json::Value as JsonValue;

use crate::server::model::{
    query::{NormalizedQuery, RecordFilter, SortDirection, SortTarget},
    record::{CreateRecordParams, Record, RecordId, UpdateRecordParams},
};

use entity::document::Column;
use entity::prelude::Document;

/// Bound used for `limit = 0`, which requests every remaining record.
const UNBOUNDED_LIMIT: u64 = i64::MAX as u64;

/// Repository providing database operations for one record collection.
///
/// Every query is scoped to the collection the repository was created for.
pub struct DocumentRepository<'a> {
    db: &'a DatabaseConnection,
    collection: &'static str,
}

impl<'a> DocumentRepository<'a> {
    /// Creates a new DocumentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `collection` - Name of the collection every query is scoped to
    ///
    /// # Returns
    /// - `DocumentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection, collection: &'static str) -> Self {
        Self { db, collection }
    }

    /// Finds records matching the query filter, ordered and paginated.
    ///
    /// # Arguments
    /// - `query` - Normalized query with filter, sort keys, skip and limit
    ///
    /// # Returns
    /// - `Ok(Vec<Record>)` - Page of matching records
    /// - `Err(DbErr)` - Database error or stored body that is not a JSON object
    pub async fn find(&self, query: &NormalizedQuery) -> Result<Vec<Record>, DbErr> {
        let mut select = Document::find().filter(self.filter_condition(&query.filter));

        for key in &query.sort {
            select = order_by(select, &key.target, key.direction);
        }

        // Tie-break on insertion order in the direction of the primary key
        let tie_break = query
            .sort
            .first()
            .map(|key| key.direction)
            .unwrap_or(SortDirection::Descending);
        select = order_by(select, &SortTarget::Id, tie_break);

        let limit = if query.limit == 0 {
            UNBOUNDED_LIMIT
        } else {
            query.limit
        };

        let models = select
            .offset(query.skip)
            .limit(limit)
            .all(self.db)
            .await?;

        models.into_iter().map(Record::from_entity).collect()
    }

    /// Counts every record of the collection, ignoring any filter.
    pub async fn count(&self) -> Result<u64, DbErr> {
        Document::find()
            .filter(Column::Collection.eq(self.collection))
            .count(self.db)
            .await
    }

    /// Finds a record by its identifier.
    ///
    /// # Returns
    /// - `Ok(Some(Record))` - Record found in this collection
    /// - `Ok(None)` - No record with that identifier in this collection
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: RecordId) -> Result<Option<Record>, DbErr> {
        Document::find_by_id(id.0)
            .filter(Column::Collection.eq(self.collection))
            .one(self.db)
            .await?
            .map(Record::from_entity)
            .transpose()
    }

    /// Finds the oldest record whose body field matches `value`.
    ///
    /// # Arguments
    /// - `field` - Dotted body path, e.g. `patient_id`
    /// - `value` - Raw value, matched as text or as its number/boolean reading
    pub async fn find_one_by_field(
        &self,
        field: &str,
        value: &str,
    ) -> Result<Option<Record>, DbErr> {
        Document::find()
            .filter(Column::Collection.eq(self.collection))
            .filter(field_matches(field, value))
            .order_by(Column::Id, Order::Asc)
            .one(self.db)
            .await?
            .map(Record::from_entity)
            .transpose()
    }

    /// Inserts a record, letting the store assign the identifier and timestamps.
    pub async fn create(&self, params: CreateRecordParams) -> Result<Record, DbErr> {
        let now = Utc::now();

        let model = entity::document::ActiveModel {
            collection: ActiveValue::Set(self.collection.to_string()),
            body: ActiveValue::Set(JsonValue::Object(params.fields)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Record::from_entity(model)
    }

    /// Overwrites body fields and pushes the history entry in one transaction.
    ///
    /// Fields in `params.set` replace the stored values; fields not named are kept. The
    /// history entry, when present, is pushed as a single element at the end of its array,
    /// creating the array if the body lacks it.
    ///
    /// # Returns
    /// - `Ok(Some(Record))` - The record after the update
    /// - `Ok(None)` - No record with that identifier in this collection
    /// - `Err(DbErr)` - Database error, or the history field holds a non-array value
    pub async fn update_by_id(&self, params: UpdateRecordParams) -> Result<Option<Record>, DbErr> {
        let txn = self.db.begin().await?;

        let model = Document::find_by_id(params.id.0)
            .filter(Column::Collection.eq(self.collection))
            .one(&txn)
            .await?;

        let Some(model) = model else {
            txn.commit().await?;
            return Ok(None);
        };

        let body = match apply_update(&model, params) {
            Ok(body) => body,
            Err(err) => {
                txn.rollback().await?;
                return Err(err);
            }
        };

        let mut active = model.into_active_model();
        active.body = ActiveValue::Set(body);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(&txn).await?;
        txn.commit().await?;

        Record::from_entity(updated).map(Some)
    }

    /// Deletes a record and returns what was removed.
    ///
    /// # Returns
    /// - `Ok(Some(Record))` - The deleted record
    /// - `Ok(None)` - No record with that identifier in this collection
    /// - `Err(DbErr)` - Database error
    pub async fn delete_by_id(&self, id: RecordId) -> Result<Option<Record>, DbErr> {
        let txn = self.db.begin().await?;

        let model = Document::find_by_id(id.0)
            .filter(Column::Collection.eq(self.collection))
            .one(&txn)
            .await?;

        let Some(model) = model else {
            txn.commit().await?;
            return Ok(None);
        };

        Document::delete_by_id(model.id).exec(&txn).await?;
        txn.commit().await?;

        Record::from_entity(model).map(Some)
    }

    fn filter_condition(&self, filter: &RecordFilter) -> Condition {
        let mut condition = Condition::all().add(Column::Collection.eq(self.collection));

        if let Some(id) = filter.id {
            condition = condition.add(Column::Id.eq(id.0));
        }

        for (field, value) in &filter.fields {
            condition = condition.add(field_matches(field, value));
        }

        condition
    }
}

/// Computes the body produced by an update without touching the store.
fn apply_update(
    model: &entity::document::Model,
    params: UpdateRecordParams,
) -> Result<JsonValue, DbErr> {
    let mut body = match &model.body {
        JsonValue::Object(body) => body.clone(),
        other => {
            return Err(DbErr::Custom(format!(
                "Document {} body is not a JSON object: {}",
                model.id, other
            )))
        }
    };

    for (key, value) in params.set {
        body.insert(key, value);
    }

    if let Some(append) = params.append {
        match body
            .entry(append.field)
            .or_insert_with(|| JsonValue::Array(Vec::new()))
        {
            JsonValue::Array(entries) => entries.push(append.entry),
            _ => {
                return Err(DbErr::Custom(format!(
                    "Field {} of document {} is not an array",
                    append.field, model.id
                )))
            }
        }
    }

    Ok(JsonValue::Object(body))
}

fn json_path(field: &str) -> String {
    format!("$.{}", field)
}

/// Matches a body field against a raw query value.
///
/// Query values arrive as text, so the field matches when it equals the text itself or
/// the number or boolean the text reads as. `json_extract` yields 1/0 for JSON booleans.
fn field_matches(field: &str, raw: &str) -> Condition {
    let path = json_path(field);

    let mut candidates: Vec<Value> = vec![raw.to_string().into()];
    if let Ok(int) = raw.parse::<i64>() {
        candidates.push(int.into());
    } else if let Ok(float) = raw.parse::<f64>() {
        if float.is_finite() {
            candidates.push(float.into());
        }
    }
    match raw {
        "true" => candidates.push(1i64.into()),
        "false" => candidates.push(0i64.into()),
        _ => {}
    }

    candidates
        .into_iter()
        .fold(Condition::any(), |condition, candidate| {
            condition.add(Expr::cust_with_values(
                "json_extract(body, ?) = ?",
                [Value::from(path.clone()), candidate],
            ))
        })
}

fn order_by(
    select: Select<Document>,
    target: &SortTarget,
    direction: SortDirection,
) -> Select<Document> {
    let order = match direction {
        SortDirection::Ascending => Order::Asc,
        SortDirection::Descending => Order::Desc,
    };

    match target {
        SortTarget::Id => select.order_by(Column::Id, order),
        SortTarget::CreatedAt => select.order_by(Column::CreatedAt, order),
        SortTarget::UpdatedAt => select.order_by(Column::UpdatedAt, order),
        SortTarget::Field(field) => select.order_by(
            Expr::cust_with_values("json_extract(body, ?)", [json_path(field)]),
            order,
        ),
    }
}
