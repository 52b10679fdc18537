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
        service::device::DeviceService,
        state::AppState,
    },
};

/// Tag for grouping device endpoints in OpenAPI documentation
pub static DEVICE_TAG: &str = "device";

/// List devices.
///
/// Every query key other than `skip`, `limit` and `sortBy` is matched exactly against the
/// device body. `total` is the size of the whole collection.
///
/// # Returns
/// - `200 OK` - Page of devices
/// - `400 Bad Request` - Malformed pagination, sort or filter key
/// - `500 Internal Server Error` - Store failure, as an envelope
#[utoipa::path(
    get,
    path = "/api/devices",
    tag = DEVICE_TAG,
    params(
        ("skip" = Option<u64>, Query, description = "Records to skip (default: 0)"),
        ("limit" = Option<u64>, Query, description = "Page size, 0 for all (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort keys, `-` prefix for descending (default: -createdAt)")
    ),
    responses(
        (status = 200, description = "Page of devices", body = Envelope<Vec<RecordDto>>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Store failure", body = Envelope<Vec<RecordDto>>)
    ),
)]
pub async fn get_devices(State(state): State<AppState>, query: RawQuery) -> Response {
    let result = match query_params(query) {
        Ok(raw) => DeviceService::new(&state.db)
            .list_all(raw)
            .await
            .map(records_envelope),
        Err(err) => Err(err),
    };

    respond(&state, result)
}

/// Get a device by ID.
///
/// # Returns
/// - `200 OK` - The device, or a soft not-found envelope with `error=true`
/// - `500 Internal Server Error` - Malformed identifier or store failure, as an envelope
#[utoipa::path(
    get,
    path = "/api/devices/{id}",
    tag = DEVICE_TAG,
    params(
        ("id" = i32, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Device or soft not-found", body = Envelope<RecordDto>),
        (status = 500, description = "Store failure", body = Envelope<RecordDto>)
    ),
)]
pub async fn get_device(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let envelope = DeviceService::new(&state.db).get_by_id(&id).await;

    respond(&state, Ok(record_envelope(envelope)))
}

/// Get the oldest device with the given name.
#[utoipa::path(
    get,
    path = "/api/devices/by-name/{name}",
    tag = DEVICE_TAG,
    params(
        ("name" = String, Path, description = "Device name")
    ),
    responses(
        (status = 200, description = "Device or soft not-found", body = Envelope<RecordDto>),
        (status = 500, description = "Store failure", body = Envelope<RecordDto>)
    ),
)]
pub async fn get_device_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let envelope = DeviceService::new(&state.db).get_by_name(&name).await;

    respond(&state, Ok(record_envelope(envelope)))
}

/// Get the oldest device assigned to the given patient.
#[utoipa::path(
    get,
    path = "/api/devices/by-patient/{patient_id}",
    tag = DEVICE_TAG,
    params(
        ("patient_id" = String, Path, description = "Patient ID")
    ),
    responses(
        (status = 200, description = "Device or soft not-found", body = Envelope<RecordDto>),
        (status = 500, description = "Store failure", body = Envelope<RecordDto>)
    ),
)]
pub async fn get_device_by_patient_id(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Response {
    let envelope = DeviceService::new(&state.db)
        .get_by_patient_id(&patient_id)
        .await;

    respond(&state, Ok(record_envelope(envelope)))
}

/// Get a device's usage history.
///
/// # Returns
/// - `200 OK` - History entries in append order, or a soft not-found envelope when the
///   device cannot be read for any reason
#[utoipa::path(
    get,
    path = "/api/devices/{id}/history",
    tag = DEVICE_TAG,
    params(
        ("id" = i32, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Envelope whose data is the list of history entries", body = Object)
    ),
)]
pub async fn get_device_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let envelope = DeviceService::new(&state.db).get_history(&id).await;

    respond(&state, Ok(envelope))
}

/// Create a device.
///
/// A device created without `deviceUsingHistory` starts with an empty history.
///
/// # Returns
/// - `201 Created` - The stored device
/// - `400 Bad Request` - Body is not a JSON object
/// - `500 Internal Server Error` - Store failure, as an envelope
#[utoipa::path(
    post,
    path = "/api/devices",
    tag = DEVICE_TAG,
    request_body = Object,
    responses(
        (status = 201, description = "Created device", body = Envelope<RecordDto>),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 500, description = "Store failure", body = Envelope<RecordDto>)
    ),
)]
pub async fn create_device(State(state): State<AppState>, body: RawBody) -> Response {
    let result = match json_body(body) {
        Ok(body) => Ok(DeviceService::new(&state.db).insert(body).await),
        Err(err) => Err(err),
    };

    respond(&state, result.map(record_envelope))
}

/// Update a device.
///
/// Fields present in the body overwrite the stored ones. The `deviceUsingHistory` value is
/// appended to the usage history as a single entry; without one, an empty array is appended.
///
/// # Returns
/// - `202 Accepted` - The updated device
/// - `400 Bad Request` - Body is not a JSON object
/// - `500 Internal Server Error` - No such device, malformed identifier or store failure
#[utoipa::path(
    put,
    path = "/api/devices/{id}",
    tag = DEVICE_TAG,
    params(
        ("id" = i32, Path, description = "Device ID")
    ),
    request_body = Object,
    responses(
        (status = 202, description = "Updated device", body = Envelope<RecordDto>),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 500, description = "Update failed", body = Envelope<RecordDto>)
    ),
)]
pub async fn update_device(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: RawBody,
) -> Response {
    let result = match json_body(body) {
        Ok(body) => Ok(DeviceService::new(&state.db).update(&id, body).await),
        Err(err) => Err(err),
    };

    respond(&state, result.map(record_envelope))
}

/// Delete a device.
///
/// # Returns
/// - `202 Accepted` - The removed device
/// - `200 OK` - Soft not-found envelope with `error=true`
/// - `400 Bad Request` - Malformed identifier
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    delete,
    path = "/api/devices/{id}",
    tag = DEVICE_TAG,
    params(
        ("id" = i32, Path, description = "Device ID")
    ),
    responses(
        (status = 202, description = "Deleted device", body = Envelope<RecordDto>),
        (status = 200, description = "Device not found", body = Envelope<RecordDto>),
        (status = 400, description = "Invalid identifier", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_device(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = DeviceService::new(&state.db).delete(&id).await;

    respond(&state, result.map(record_envelope))
}
