use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};
use std::{collections::HashMap, fmt, marker::PhantomData};

use crate::{
    model::envelope::{Envelope, Outcome},
    server::{
        data::document::DocumentRepository,
        error::AppError,
        model::{
            collection::{Account, Collection},
            record::{CreateRecordParams, Record, UpdateRecordParams},
        },
        util::{parse::parse_record_id, query::normalize_query},
    },
};

pub const UPDATE_SUCCESS_MESSAGE: &str = "Update successfully";
pub const UPDATE_FAILED_MESSAGE: &str = "Update failed";
pub const DELETE_SUCCESS_MESSAGE: &str = "Delete successfully";

pub type AccountService<'a> = RecordService<'a, Account>;

/// CRUD operations shared by every record collection.
///
/// The collection type parameter fixes the stored collection name and the user-facing
/// messages. Apart from `list_all` validation and `delete`, every operation reports its
/// result through the returned envelope instead of an error.
pub struct RecordService<'a, C: Collection> {
    db: &'a DatabaseConnection,
    collection: PhantomData<C>,
}

impl<'a, C: Collection> RecordService<'a, C> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            collection: PhantomData,
        }
    }

    fn repo(&self) -> DocumentRepository<'a> {
        DocumentRepository::new(self.db, C::NAME)
    }

    /// Lists a page of records together with the collection size.
    ///
    /// `skip`, `limit` and `sortBy` are pulled out of the raw query and every other key
    /// becomes an exact-match filter. `total` counts the whole collection regardless of the
    /// filter.
    ///
    /// # Returns
    /// - `Ok(Envelope)` - 200 with the page and `total`, or 500 when the store fails
    /// - `Err(AppError::ValidationErr)` - Malformed pagination, sort or filter key
    pub async fn list_all(
        &self,
        raw: HashMap<String, String>,
    ) -> Result<Envelope<Vec<Record>>, AppError> {
        let query = normalize_query(raw)?;
        let repo = self.repo();

        let records = match repo.find(&query).await {
            Ok(records) => records,
            Err(err) => return Ok(self.failed("list", err)),
        };

        let total = match repo.count().await {
            Ok(total) => total,
            Err(err) => return Ok(self.failed("count", err)),
        };

        Ok(Envelope::success(Outcome::Listed, records).with_total(total))
    }

    /// Gets a record by its identifier
    ///
    /// A missing record is a soft not-found (`error=true`, 200).
    pub async fn get_by_id(&self, id: &str) -> Envelope<Record> {
        let result = match parse_record_id(id) {
            Ok(id) => self.repo().find_by_id(id).await.map_err(AppError::from),
            Err(err) => Err(err.into()),
        };

        self.found(result)
    }

    /// Gets the oldest record whose body `field` matches `value`
    pub(crate) async fn get_by_field(&self, field: &str, value: &str) -> Envelope<Record> {
        let result = self
            .repo()
            .find_one_by_field(field, value)
            .await
            .map_err(AppError::from);

        self.found(result)
    }

    /// Inserts a record built from the client body
    pub async fn insert(&self, body: Map<String, Value>) -> Envelope<Record> {
        let params = CreateRecordParams::from_body::<C>(body);

        match self.repo().create(params).await {
            Ok(record) => Envelope::success(Outcome::Created, record),
            Err(err) => self.failed("create", err).with_message(C::create_failed_message()),
        }
    }

    /// Overwrites the named fields of a record and, for collections with a history field,
    /// appends the body's history value as one entry.
    ///
    /// # Returns
    /// - 202 with the updated record
    /// - 500 "Update failed" when no record matches the identifier
    /// - 500 with `errors` when the identifier is malformed or the store fails
    pub async fn update(&self, id: &str, body: Map<String, Value>) -> Envelope<Record> {
        let result = match parse_record_id(id) {
            Ok(id) => {
                let params = UpdateRecordParams::from_body::<C>(id, body);
                self.repo().update_by_id(params).await.map_err(AppError::from)
            }
            Err(err) => Err(err.into()),
        };

        match result {
            Ok(Some(record)) => {
                Envelope::success(Outcome::Updated, record).with_message(UPDATE_SUCCESS_MESSAGE)
            }
            Ok(None) => Envelope::build(Outcome::Failed, None).with_message(UPDATE_FAILED_MESSAGE),
            Err(err) => self.failed("update", err),
        }
    }

    /// Deletes a record and returns it.
    ///
    /// Unlike the other operations, malformed identifiers and store failures are returned
    /// as errors for the caller to report.
    ///
    /// # Returns
    /// - `Ok(Envelope)` - 202 with the removed record, or a soft not-found
    /// - `Err(AppError)` - Malformed identifier or store failure
    pub async fn delete(&self, id: &str) -> Result<Envelope<Record>, AppError> {
        let id = parse_record_id(id)?;

        let envelope = match self.repo().delete_by_id(id).await? {
            Some(record) => {
                Envelope::success(Outcome::Deleted, record).with_message(DELETE_SUCCESS_MESSAGE)
            }
            None => Envelope::not_found(C::delete_not_found_message()),
        };

        Ok(envelope)
    }

    fn found(&self, result: Result<Option<Record>, AppError>) -> Envelope<Record> {
        match result {
            Ok(Some(record)) => Envelope::success(Outcome::Found, record),
            Ok(None) => Envelope::not_found(C::not_found_message()),
            Err(err) => self.failed("get", err),
        }
    }

    fn failed<T>(&self, operation: &str, err: impl fmt::Display) -> Envelope<T> {
        tracing::error!("Failed to {} {}: {}", operation, C::LABEL, err);

        Envelope::failure(err)
    }
}
