//! The function dispatch table.
//!
//! Commands can end in a function call such as `json(data.token)` or
//! `int()`. The names a command may use are fixed: each maps to one variant
//! of `Builtin`, which knows its argument count and how to invoke the
//! implementation. Adding a function means adding a variant here, nothing
//! else. The table is read-only and trivially shared across workers.

use super::convert::{to_double, to_int};
use super::error::FunctionError;
use super::extract::{json_extract, regex_extract};
use crate::models::Value;

/// The callable functions of the command language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `json(path)` / `json(document, path)` - JSON path extraction
    Json,
    /// `int(text)` - integer conversion
    Int,
    /// `double(text)` - floating-point conversion
    Double,
    /// `regex(pattern)` / `regex(content, pattern)` - regex capture extraction
    Regex,
}

impl Builtin {
    /// Resolves a function name from a command to its registry entry.
    ///
    /// # Returns
    ///
    /// `Some(Builtin)` for a known name, `None` otherwise (the parser treats
    /// `None` as a fatal unknown-function condition).
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Builtin::Json),
            "int" => Some(Builtin::Int),
            "double" => Some(Builtin::Double),
            "regex" => Some(Builtin::Regex),
            _ => None,
        }
    }

    /// The name this function is invoked by in commands.
    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Json => "json",
            Builtin::Int => "int",
            Builtin::Double => "double",
            Builtin::Regex => "regex",
        }
    }

    /// Total number of arguments the function consumes, the implicit context
    /// argument included.
    pub fn arg_count(&self) -> usize {
        match self {
            Builtin::Json | Builtin::Regex => 2,
            Builtin::Int | Builtin::Double => 1,
        }
    }

    /// Whether the path's resolved value is prepended as the first argument
    /// when present.
    ///
    /// All current builtins take a context; the flag exists so a future
    /// context-free function (a generator, say) can opt out.
    pub fn takes_context(&self) -> bool {
        true
    }

    /// Invokes the function with the assembled argument list.
    ///
    /// # Arguments
    ///
    /// * `args` - All arguments as strings, the implicit context first when
    ///   one was present
    ///
    /// # Returns
    ///
    /// The function's typed result, or a `FunctionError` the caller is
    /// expected to log and suppress.
    pub fn invoke(&self, args: &[String]) -> Result<Value, FunctionError> {
        if args.len() != self.arg_count() {
            return Err(FunctionError::BadArgumentCount {
                name: self.name(),
                expected: self.arg_count(),
                got: args.len(),
            });
        }
        match self {
            Builtin::Json => json_extract(&args[0], &args[1]),
            Builtin::Int => Ok(Value::Int(to_int(&args[0]))),
            Builtin::Double => Ok(Value::Double(to_double(&args[0]))),
            Builtin::Regex => regex_extract(&args[0], &args[1]).map(Value::Text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(Builtin::lookup("json"), Some(Builtin::Json));
        assert_eq!(Builtin::lookup("int"), Some(Builtin::Int));
        assert_eq!(Builtin::lookup("double"), Some(Builtin::Double));
        assert_eq!(Builtin::lookup("regex"), Some(Builtin::Regex));
        assert_eq!(Builtin::lookup("md5"), None);
        assert_eq!(Builtin::lookup("JSON"), None);
    }

    #[test]
    fn test_invoke_json() {
        let args = vec![r#"{"token": "abc"}"#.to_string(), "token".to_string()];
        assert_eq!(
            Builtin::Json.invoke(&args).unwrap(),
            Value::Text("abc".to_string())
        );
    }

    #[test]
    fn test_invoke_conversions() {
        assert_eq!(
            Builtin::Int.invoke(&["42".to_string()]).unwrap(),
            Value::Int(42)
        );
        assert_eq!(
            Builtin::Double.invoke(&["2.5".to_string()]).unwrap(),
            Value::Double(2.5)
        );
    }

    #[test]
    fn test_invoke_regex() {
        let args = vec!["code=5aBcd".to_string(), "code=(\\w+)".to_string()];
        assert_eq!(
            Builtin::Regex.invoke(&args).unwrap(),
            Value::Text("5aBcd".to_string())
        );
    }

    #[test]
    fn test_invoke_wrong_argument_count() {
        let err = Builtin::Json.invoke(&["only-one".to_string()]).unwrap_err();
        assert!(matches!(err, FunctionError::BadArgumentCount { .. }));

        let err = Builtin::Int.invoke(&[]).unwrap_err();
        assert!(matches!(err, FunctionError::BadArgumentCount { .. }));
    }

    #[test]
    fn test_registry_metadata() {
        assert_eq!(Builtin::Json.name(), "json");
        assert_eq!(Builtin::Json.arg_count(), 2);
        assert_eq!(Builtin::Int.arg_count(), 1);
        assert!(Builtin::Regex.takes_context());
    }
}
