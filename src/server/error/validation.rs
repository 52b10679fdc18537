use std::num::ParseIntError;
use thiserror::Error;

/// Malformed client input detected before any store access.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Failure to parse a record identifier from String
    #[error("Invalid record identifier '{value}': {source}")]
    InvalidIdentifier {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// `skip` or `limit` is not a non-negative integer
    #[error("Invalid value '{value}' for query parameter '{param}'")]
    InvalidPagination {
        /// Name of the query parameter
        param: &'static str,
        /// The rejected value
        value: String,
    },

    /// A filter key or `sortBy` entry is not a dotted path of word characters
    #[error("Invalid field name '{0}'")]
    InvalidFieldName(String),
}
