//! Error types for the extraction and conversion functions.

use std::fmt;

/// Errors raised by extraction functions.
///
/// These are function-level failures: the command parser logs them and lets
/// the enclosing template resolution continue with an empty result, unlike
/// grammar-level failures which abort the resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionError {
    /// JSON extraction failed: unparseable document, missing field, index
    /// out of range, or a non-object where an object was required.
    Json(String),

    /// Regex extraction failed: the pattern does not compile or has no
    /// capture group.
    Regex(String),

    /// The function was invoked with the wrong number of arguments.
    BadArgumentCount {
        /// Name of the function as written in the command
        name: &'static str,
        /// Number of arguments the function expects, context included
        expected: usize,
        /// Number of arguments actually assembled
        got: usize,
    },
}

impl fmt::Display for FunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionError::Json(msg) => write!(f, "JSON extraction failed: {}", msg),
            FunctionError::Regex(msg) => write!(f, "Regex extraction failed: {}", msg),
            FunctionError::BadArgumentCount {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Function '{}' expects {} argument(s), got {}",
                    name, expected, got
                )
            }
        }
    }
}

impl std::error::Error for FunctionError {}
