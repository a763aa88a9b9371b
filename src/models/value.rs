//! Resolved command values.
//!
//! A resolved placeholder is not always a string: the conversion functions
//! produce typed scalars, and JSON extraction can produce raw JSON text. The
//! tagged `Value` type carries that distinction so a template consisting of a
//! single placeholder can hand the typed result back to the caller, while
//! placeholders embedded in a larger template stringify uniformly.

use std::fmt;

/// The result of resolving one command.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Plain text: exchange field text, a variable value, a regex capture,
    /// a scalar JSON leaf, or a pass-through literal.
    Text(String),

    /// Raw JSON text of an object or array returned by JSON extraction.
    Json(String),

    /// Integer produced by the `int` conversion function.
    Int(i64),

    /// Floating-point number produced by the `double` conversion function.
    Double(f64),
}

impl Value {
    /// Creates a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Creates an empty text value.
    pub fn empty() -> Self {
        Value::Text(String::new())
    }

    /// Returns `true` if this is a text value with no content.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Value::Text(s) if s.is_empty())
    }

    /// Returns the integer payload, if this value is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the floating-point payload, if this value is a double.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the textual payload for text and JSON values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) | Value::Json(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value as the text that would be substituted into a
    /// template: numbers in their canonical decimal form, text and JSON
    /// verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) | Value::Json(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Double(n) => write!(f, "{}", n),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text() {
        assert_eq!(Value::text("hello").to_string(), "hello");
        assert_eq!(Value::Json(r#"{"a":1}"#.to_string()).to_string(), r#"{"a":1}"#);
    }

    #[test]
    fn test_display_numbers() {
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::Double(3.25).to_string(), "3.25");
        assert_eq!(Value::Double(0.0).to_string(), "0");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Int(5).as_int(), Some(5));
        assert_eq!(Value::text("5").as_int(), None);
        assert_eq!(Value::Double(1.5).as_double(), Some(1.5));
        assert_eq!(Value::text("abc").as_text(), Some("abc"));
        assert_eq!(Value::Int(1).as_text(), None);
    }

    #[test]
    fn test_empty() {
        assert!(Value::empty().is_empty_text());
        assert!(!Value::text("x").is_empty_text());
        assert!(!Value::Int(0).is_empty_text());
    }
}
