//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Collections describe the per-entity
//! differences (storage name, history field, messages) that parameterize the shared
//! record pipeline.

pub mod collection;
pub mod query;
pub mod record;
