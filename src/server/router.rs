use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{
    model::{api::ErrorDto, record::RecordDto},
    server::{
        controller::{
            account::{self, create_account, delete_account, get_account, get_accounts, update_account},
            device::{
                self, create_device, delete_device, get_device, get_device_by_name,
                get_device_by_patient_id, get_device_history, get_devices, update_device,
            },
        },
        state::AppState,
    },
};

/// OpenAPI document covering every record endpoint.
#[derive(OpenApi)]
#[openapi(
    info(title = "Device Registry API"),
    paths(
        account::get_accounts,
        account::get_account,
        account::create_account,
        account::update_account,
        account::delete_account,
        device::get_devices,
        device::get_device,
        device::get_device_by_name,
        device::get_device_by_patient_id,
        device::get_device_history,
        device::create_device,
        device::update_device,
        device::delete_device,
    ),
    components(schemas(RecordDto, ErrorDto))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/accounts", get(get_accounts).post(create_account))
        .route(
            "/api/accounts/{id}",
            get(get_account).put(update_account).delete(delete_account),
        )
        .route("/api/devices", get(get_devices).post(create_device))
        .route("/api/devices/by-name/{name}", get(get_device_by_name))
        .route(
            "/api/devices/by-patient/{patient_id}",
            get(get_device_by_patient_id),
        )
        .route(
            "/api/devices/{id}",
            get(get_device).put(update_device).delete(delete_device),
        )
        .route("/api/devices/{id}/history", get(get_device_history))
        .route("/api/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
