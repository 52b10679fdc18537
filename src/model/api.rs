use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body written for failures forwarded to the error reporter.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
