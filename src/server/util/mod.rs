//! Parsing helpers shared by the service layer.

pub mod parse;
pub mod query;
