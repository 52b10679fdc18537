//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository) layer.
//! Services normalize inputs, call repositories, and classify every result into a response
//! envelope. Persistence failures are caught here and reported as 500 envelopes, with the
//! exception of deletes, whose failures propagate to the caller.

pub mod device;
pub mod record;

#[cfg(test)]
mod test;
