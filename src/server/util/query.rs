//! Query normalization for listing endpoints.
//!
//! Splits the raw query map into pagination and sort directives and the residual filter.
//! `skip`, `limit` and `sortBy` are removed from the map before what is left becomes the
//! store filter. An empty directive counts as absent. The `_id` key is coerced into a
//! [`RecordId`](crate::server::model::record::RecordId) so a malformed identifier is
//! rejected before the store is touched.

use std::collections::HashMap;

use crate::server::{
    error::validation::ValidationError,
    model::{
        query::{
            NormalizedQuery, RecordFilter, SortDirection, SortKey, SortTarget, DEFAULT_LIMIT,
            DEFAULT_SKIP,
        },
        record::{ID_FIELD, RESERVED_FIELDS},
    },
    util::parse::{parse_record_id, validate_field_name},
};

const SKIP_PARAM: &str = "skip";
const LIMIT_PARAM: &str = "limit";
const SORT_PARAM: &str = "sortBy";

/// Normalizes a raw listing query.
///
/// # Arguments
/// - `raw` - Query parameters as received
///
/// # Returns
/// - `Ok(NormalizedQuery)` - Directives with defaults applied and the residual filter
/// - `Err(ValidationError)` - Malformed `_id`, `skip`, `limit`, sort field or filter key, or
///   a filter on the store-managed `createdAt`/`updatedAt` timestamps
pub fn normalize_query(mut raw: HashMap<String, String>) -> Result<NormalizedQuery, ValidationError> {
    let skip = take_count(&mut raw, SKIP_PARAM, DEFAULT_SKIP)?;
    let limit = take_count(&mut raw, LIMIT_PARAM, DEFAULT_LIMIT)?;

    let sort = match take_directive(&mut raw, SORT_PARAM) {
        Some(value) => parse_sort(&value)?,
        None => vec![SortKey::newest_first()],
    };

    let id = take_directive(&mut raw, ID_FIELD)
        .map(|value| parse_record_id(&value))
        .transpose()?;

    for key in raw.keys() {
        validate_field_name(key)?;
        if RESERVED_FIELDS.contains(&key.as_str()) {
            return Err(ValidationError::InvalidFieldName(key.clone()));
        }
    }

    Ok(NormalizedQuery {
        filter: RecordFilter {
            id,
            fields: raw.into_iter().collect(),
        },
        skip,
        limit,
        sort,
    })
}

fn take_directive(raw: &mut HashMap<String, String>, key: &str) -> Option<String> {
    raw.remove(key).filter(|value| !value.trim().is_empty())
}

fn take_count(
    raw: &mut HashMap<String, String>,
    param: &'static str,
    default: u64,
) -> Result<u64, ValidationError> {
    match take_directive(raw, param) {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|_| ValidationError::InvalidPagination { param, value }),
        None => Ok(default),
    }
}

/// Parses a sort expression: space or comma separated field names, each optionally
/// prefixed with `-` for descending or `+` for ascending order.
fn parse_sort(value: &str) -> Result<Vec<SortKey>, ValidationError> {
    let mut keys = Vec::new();

    for token in value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
    {
        let (direction, name) = match token.strip_prefix('-') {
            Some(name) => (SortDirection::Descending, name),
            None => (
                SortDirection::Ascending,
                token.strip_prefix('+').unwrap_or(token),
            ),
        };

        let target = match name {
            ID_FIELD => SortTarget::Id,
            "createdAt" => SortTarget::CreatedAt,
            "updatedAt" => SortTarget::UpdatedAt,
            field => {
                validate_field_name(field)?;
                SortTarget::Field(field.to_string())
            }
        };

        keys.push(SortKey { target, direction });
    }

    if keys.is_empty() {
        keys.push(SortKey::newest_first());
    }

    Ok(keys)
}
