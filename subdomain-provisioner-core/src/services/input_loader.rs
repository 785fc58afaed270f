//! Input file loading

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult};

/// Read `path` and parse it as a JSON object.
///
/// The object is returned uninterpreted; field checks happen in
/// [`validate_record`](super::validate_record).
pub fn load_input(path: &Path) -> CoreResult<Map<String, Value>> {
    let bytes = std::fs::read(path).map_err(|e| CoreError::FileNotFound {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let value: Value = serde_json::from_slice(&bytes).map_err(|e| CoreError::MalformedInput {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    match value {
        Value::Object(map) => {
            log::debug!("Loaded {} field(s) from {}", map.len(), path.display());
            Ok(map)
        }
        other => Err(CoreError::MalformedInput {
            path: path.to_path_buf(),
            detail: format!("expected an object, found {}", json_type_name(&other)),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
