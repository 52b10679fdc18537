//! Normalized listing query.

use std::collections::BTreeMap;

use crate::server::model::record::RecordId;

/// Records skipped when the request names no `skip`.
pub const DEFAULT_SKIP: u64 = 0;

/// Page size when the request names no `limit`. A limit of 0 means no limit.
pub const DEFAULT_LIMIT: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// What a sort key orders by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortTarget {
    Id,
    CreatedAt,
    UpdatedAt,
    /// Dotted path into the record body.
    Field(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub target: SortTarget,
    pub direction: SortDirection,
}

impl SortKey {
    /// Default ordering: most recently created first.
    pub fn newest_first() -> Self {
        Self {
            target: SortTarget::CreatedAt,
            direction: SortDirection::Descending,
        }
    }
}

/// Store filter derived from the query: an optional identifier plus exact matches on
/// body fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub id: Option<RecordId>,
    pub fields: BTreeMap<String, String>,
}

/// Listing query with pagination and sort directives separated from the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    pub filter: RecordFilter,
    pub skip: u64,
    pub limit: u64,
    pub sort: Vec<SortKey>,
}

impl Default for NormalizedQuery {
    fn default() -> Self {
        Self {
            filter: RecordFilter::default(),
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
            sort: vec![SortKey::newest_first()],
        }
    }
}
