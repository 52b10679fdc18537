use crate::server::{error::validation::ValidationError, model::record::RecordId};

/// Parses a record identifier from a string
///
/// # Arguments
/// - `value` - The string to attempt to parse into a `RecordId`
///
/// # Returns
/// - `Ok(RecordId)` - Successfully parsed identifier
/// - `Err(ValidationError::InvalidIdentifier)` - The string is not an identifier
pub fn parse_record_id(value: &str) -> Result<RecordId, ValidationError> {
    let id = value
        .parse::<i32>()
        .map_err(|e| ValidationError::InvalidIdentifier {
            value: value.to_string(),
            source: e,
        })?;

    Ok(RecordId(id))
}

/// Checks that a field name is a dotted path of word characters (`name`, `owner.email`).
///
/// # Returns
/// - `Ok(())` - The name can be used as a body path
/// - `Err(ValidationError::InvalidFieldName)` - Empty segment or unsupported character
pub fn validate_field_name(name: &str) -> Result<(), ValidationError> {
    let valid = name.split('.').all(|segment| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    });

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidFieldName(name.to_string()))
    }
}
