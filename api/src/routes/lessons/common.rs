//! Shared input validation for the lesson update endpoints.
//!
//! Both the body-based and the path-parameter update forms funnel through
//! these helpers, so the allow-list and numeric parsing rules cannot
//! drift apart again. Everything here runs before any store call.

use mongodb::bson::Bson;
use serde_json::Value;

use crate::response::ApiError;

/// Attributes a client may assign through the update endpoints. `image` is
/// deliberately absent.
pub const ALLOWED_ATTRIBUTES: [&str; 4] = ["spaces", "subject", "location", "price"];

/// Attributes whose values must be non-negative integers.
const NUMERIC_ATTRIBUTES: [&str; 2] = ["spaces", "price"];

/// A single guarded decrement request from a `spaceNeeded` batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpaceRequest {
    pub id: i64,
    pub spaces: i64,
}

/// Parses a comma-separated id list. Non-numeric entries are silently
/// dropped; an empty result after filtering is a validation error.
pub fn parse_ids(raw: &str) -> Result<Vec<i64>, ApiError> {
    let ids: Vec<i64> = raw
        .split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect();

    if ids.is_empty() {
        Err(ApiError::Validation("Invalid or missing IDs".into()))
    } else {
        Ok(ids)
    }
}

pub fn validate_attribute(attribute: &str) -> Result<(), ApiError> {
    if ALLOWED_ATTRIBUTES.contains(&attribute) {
        Ok(())
    } else {
        Err(ApiError::Validation("Invalid attribute".into()))
    }
}

/// Coerces a raw JSON value into the bson value to store for `attribute`.
///
/// Numeric attributes accept a non-negative integer, given either as a
/// JSON number or as a decimal string (the path form always supplies
/// strings). Text attributes accept strings only.
pub fn coerce_value(attribute: &str, raw: &Value) -> Result<Bson, ApiError> {
    if NUMERIC_ATTRIBUTES.contains(&attribute) {
        let parsed = match raw {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        match parsed {
            Some(value) if value >= 0 => Ok(Bson::Int64(value)),
            _ => Err(ApiError::Validation(
                "Invalid value for numeric attribute".into(),
            )),
        }
    } else {
        match raw {
            Value::String(s) => Ok(Bson::String(s.clone())),
            _ => Err(ApiError::Validation(
                "Invalid value for text attribute".into(),
            )),
        }
    }
}

/// Parses the `spaceNeeded` array of the batch-decrement form. Every entry
/// needs an integer `id` and a positive integer `spaces`; a zero or
/// negative decrement is rejected rather than applied as a no-op.
pub fn parse_space_requests(raw: &Value) -> Result<Vec<SpaceRequest>, ApiError> {
    let entries = raw
        .as_array()
        .ok_or_else(|| ApiError::Validation("spaceNeeded must be an array".into()))?;

    if entries.is_empty() {
        return Err(ApiError::Validation("spaceNeeded must not be empty".into()));
    }

    entries
        .iter()
        .map(|entry| {
            let id = entry.get("id").and_then(Value::as_i64).ok_or_else(|| {
                ApiError::Validation("Each spaceNeeded entry requires a numeric id".into())
            })?;
            let spaces = entry
                .get("spaces")
                .and_then(Value::as_i64)
                .filter(|spaces| *spaces >= 1)
                .ok_or_else(|| {
                    ApiError::Validation(
                        "Each spaceNeeded entry requires a positive spaces count".into(),
                    )
                })?;
            Ok(SpaceRequest { id, spaces })
        })
        .collect()
}
