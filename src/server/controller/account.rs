use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    model::{api::ErrorDto, envelope::Envelope, record::RecordDto},
    server::{
        controller::{
            json_body, query_params, record_envelope, records_envelope, respond, RawBody,
            RawQuery,
        },
        service::record::AccountService,
        state::AppState,
    },
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static ACCOUNT_TAG: &str = "account";

/// List accounts.
///
/// Every query key other than `skip`, `limit` and `sortBy` is matched exactly against the
/// account body. `total` is the size of the whole collection.
///
/// # Returns
/// - `200 OK` - Page of accounts
/// - `400 Bad Request` - Malformed pagination, sort or filter key
/// - `500 Internal Server Error` - Store failure, as an envelope
#[utoipa::path(
    get,
    path = "/api/accounts",
    tag = ACCOUNT_TAG,
    params(
        ("skip" = Option<u64>, Query, description = "Records to skip (default: 0)"),
        ("limit" = Option<u64>, Query, description = "Page size, 0 for all (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort keys, `-` prefix for descending (default: -createdAt)")
    ),
    responses(
        (status = 200, description = "Page of accounts", body = Envelope<Vec<RecordDto>>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Store failure", body = Envelope<Vec<RecordDto>>)
    ),
)]
pub async fn get_accounts(State(state): State<AppState>, query: RawQuery) -> Response {
    let result = match query_params(query) {
        Ok(raw) => AccountService::new(&state.db)
            .list_all(raw)
            .await
            .map(records_envelope),
        Err(err) => Err(err),
    };

    respond(&state, result)
}

/// Get an account by ID.
///
/// # Returns
/// - `200 OK` - The account, or a soft not-found envelope with `error=true`
/// - `500 Internal Server Error` - Malformed identifier or store failure, as an envelope
#[utoipa::path(
    get,
    path = "/api/accounts/{id}",
    tag = ACCOUNT_TAG,
    params(
        ("id" = i32, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account or soft not-found", body = Envelope<RecordDto>),
        (status = 500, description = "Store failure", body = Envelope<RecordDto>)
    ),
)]
pub async fn get_account(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let envelope = AccountService::new(&state.db).get_by_id(&id).await;

    respond(&state, Ok(record_envelope(envelope)))
}

/// Create an account.
///
/// # Returns
/// - `201 Created` - The stored account
/// - `400 Bad Request` - Body is not a JSON object
/// - `500 Internal Server Error` - Store failure, as an envelope
#[utoipa::path(
    post,
    path = "/api/accounts",
    tag = ACCOUNT_TAG,
    request_body = Object,
    responses(
        (status = 201, description = "Created account", body = Envelope<RecordDto>),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 500, description = "Store failure", body = Envelope<RecordDto>)
    ),
)]
pub async fn create_account(State(state): State<AppState>, body: RawBody) -> Response {
    let result = match json_body(body) {
        Ok(body) => Ok(AccountService::new(&state.db).insert(body).await),
        Err(err) => Err(err),
    };

    respond(&state, result.map(record_envelope))
}

/// Update an account.
///
/// Fields present in the body overwrite the stored ones; other fields are kept.
///
/// # Returns
/// - `202 Accepted` - The updated account
/// - `400 Bad Request` - Body is not a JSON object
/// - `500 Internal Server Error` - No such account, malformed identifier or store failure
#[utoipa::path(
    put,
    path = "/api/accounts/{id}",
    tag = ACCOUNT_TAG,
    params(
        ("id" = i32, Path, description = "Account ID")
    ),
    request_body = Object,
    responses(
        (status = 202, description = "Updated account", body = Envelope<RecordDto>),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 500, description = "Update failed", body = Envelope<RecordDto>)
    ),
)]
pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: RawBody,
) -> Response {
    let result = match json_body(body) {
        Ok(body) => Ok(AccountService::new(&state.db).update(&id, body).await),
        Err(err) => Err(err),
    };

    respond(&state, result.map(record_envelope))
}

/// Delete an account.
///
/// # Returns
/// - `202 Accepted` - The removed account
/// - `200 OK` - Soft not-found envelope with `error=true`
/// - `400 Bad Request` - Malformed identifier
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    delete,
    path = "/api/accounts/{id}",
    tag = ACCOUNT_TAG,
    params(
        ("id" = i32, Path, description = "Account ID")
    ),
    responses(
        (status = 202, description = "Deleted account", body = Envelope<RecordDto>),
        (status = 200, description = "Account not found", body = Envelope<RecordDto>),
        (status = 400, description = "Invalid identifier", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_account(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = AccountService::new(&state.db).delete(&id).await;

    respond(&state, result.map(record_envelope))
}
