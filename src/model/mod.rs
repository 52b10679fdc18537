//! Wire-level data transfer objects shared by every endpoint.

pub mod api;
pub mod envelope;
pub mod record;
