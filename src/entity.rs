use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{DataError, DataResult};

/// Trait for records that live in a named table and travel as JSON maps.
///
/// Implement this on any model that takes part in sync. The associated
/// table name becomes the target for generated statements, and `to_map`
/// produces the field map handed to the storage layer.
pub trait Entity: Serialize {
    /// The backing table for this entity (e.g. "patients", "visits").
    const TABLE_NAME: &'static str;

    /// Serialize the entity into a JSON object map.
    ///
    /// With `ignore_nil` set, top-level fields whose value is null are
    /// dropped so they do not overwrite existing columns downstream.
    fn to_map(&self, ignore_nil: bool) -> DataResult<Map<String, Value>> {
        let value = serde_json::to_value(self)?;

        let Value::Object(map) = value else {
            return Err(DataError::internal(format!(
                "{} did not serialize to an object",
                Self::TABLE_NAME
            )));
        };

        if !ignore_nil {
            return Ok(map);
        }

        Ok(map.into_iter().filter(|(_, value)| !value.is_null()).collect())
    }
}
