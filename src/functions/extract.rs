//! JSON path and regex capture extraction.
//!
//! These are the workhorses behind the `json(...)` and `regex(...)` commands:
//! pure functions from string input to string output, with no knowledge of
//! the placeholder grammar that invokes them.

use super::error::FunctionError;
use crate::models::Value;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value as JsonValue;

/// Cached pattern for an array path segment such as `items[2]`.
static ARRAY_SEGMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)\[(\d+)\]$").expect("Failed to compile array segment regex"));

/// Extracts a value from a JSON document by a dotted path.
///
/// The path is split on `.` and walked segment by segment:
///
/// - `name[index]` resolves `name` as an array field and descends into the
///   indexed element, which must itself be an object;
/// - a bare `name` resolves a field: a scalar value returns its text
///   immediately, an array returns its raw JSON text immediately, and an
///   object is descended into.
///
/// Exhausting all segments returns the current object's raw JSON text.
///
/// # Arguments
///
/// * `json` - The JSON document; its top-level value must be an object
/// * `path` - Dotted extraction path, e.g. `data.items[1].id`
///
/// # Returns
///
/// `Value::Text` for scalar leaves, `Value::Json` for raw object/array text,
/// or a `FunctionError::Json` if the path cannot be walked.
pub fn json_extract(json: &str, path: &str) -> Result<Value, FunctionError> {
    let root: JsonValue =
        serde_json::from_str(json).map_err(|e| FunctionError::Json(e.to_string()))?;
    if !root.is_object() {
        return Err(FunctionError::Json(
            "top-level JSON value is not an object".to_string(),
        ));
    }

    let mut current = root;
    for segment in path.split('.') {
        if let Some(caps) = ARRAY_SEGMENT_REGEX.captures(segment) {
            let name = caps.get(1).map_or("", |m| m.as_str());
            let index: usize = caps
                .get(2)
                .map_or("", |m| m.as_str())
                .parse()
                .map_err(|_| FunctionError::Json(format!("bad array index in '{}'", segment)))?;

            let array = current
                .get(name)
                .ok_or_else(|| FunctionError::Json(format!("field '{}' not found", name)))?
                .as_array()
                .ok_or_else(|| FunctionError::Json(format!("field '{}' is not an array", name)))?;
            let element = array.get(index).ok_or_else(|| {
                FunctionError::Json(format!(
                    "index {} out of range for array '{}' (length {})",
                    index,
                    name,
                    array.len()
                ))
            })?;
            if !element.is_object() {
                return Err(FunctionError::Json(format!(
                    "element {} of array '{}' is not an object",
                    index, name
                )));
            }
            current = element.clone();
        } else {
            let element = current
                .get(segment)
                .ok_or_else(|| FunctionError::Json(format!("field '{}' not found", segment)))?;
            match element {
                JsonValue::String(s) => return Ok(Value::Text(s.clone())),
                JsonValue::Number(n) => return Ok(Value::Text(n.to_string())),
                JsonValue::Bool(b) => return Ok(Value::Text(b.to_string())),
                JsonValue::Array(_) => return Ok(Value::Json(element.to_string())),
                JsonValue::Object(_) => current = element.clone(),
                JsonValue::Null => {
                    return Err(FunctionError::Json(format!("field '{}' is null", segment)))
                }
            }
        }
    }

    Ok(Value::Json(current.to_string()))
}

/// Extracts the first capture group of the first match of `pattern` in
/// `content`.
///
/// No match is not an error: it yields the empty string, so a probe for an
/// optional token never aborts a test step. A pattern without a capture
/// group is a usage error.
///
/// # Arguments
///
/// * `content` - Text to search
/// * `pattern` - Regular expression with at least one capture group
pub fn regex_extract(content: &str, pattern: &str) -> Result<String, FunctionError> {
    let re = Regex::new(pattern).map_err(|e| FunctionError::Regex(e.to_string()))?;

    // captures_len counts the implicit whole-match group as group 0
    if re.captures_len() < 2 {
        return Err(FunctionError::Regex(format!(
            "pattern '{}' has no capture group",
            pattern
        )));
    }

    match re.captures(content) {
        Some(caps) => Ok(caps
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()),
        None => Ok(String::new()),
    }
}
