use crate::server::{
    error::AppError,
    model::collection::{Account, Device},
    service::{
        device::DeviceService,
        record::{AccountService, RecordService},
    },
};
use sea_orm::DbErr;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use test_utils::{builder::TestBuilder, factory};


/// Unwraps a `json!` object literal into a body map.
fn body(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected JSON object, got {}", other),
    }
}

/// Builds a raw query string map from key/value pairs.
fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
