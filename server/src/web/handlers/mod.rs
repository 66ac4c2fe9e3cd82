// server/src/web/handlers/mod.rs

pub mod product_handlers;
pub mod related_product_handlers;

use crate::errors::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Pulls the attributes nested under `key` out of a JSON request body.
///
/// A missing key, `null`, an empty object, or an empty string all count as
/// missing. Attributes the target type does not know are dropped.
pub(crate) fn require_param<T: DeserializeOwned>(body: Value, key: &str) -> Result<T, AppError> {
  let nested = match body {
    Value::Object(mut root) => root.remove(key),
    _ => None,
  };
  let nested = match nested {
    None | Some(Value::Null) => return Err(AppError::missing_param(key)),
    Some(Value::Object(map)) if map.is_empty() => return Err(AppError::missing_param(key)),
    Some(Value::String(s)) if s.trim().is_empty() => return Err(AppError::missing_param(key)),
    Some(value) => value,
  };
  serde_json::from_value(nested).map_err(|e| AppError::BadRequest(e.to_string()))
}
