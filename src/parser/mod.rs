//! The command expression interpreter.
//!
//! Test specifications embed commands in `${...}` placeholders:
//!
//! ```text
//! ${response.header.X-Auth-Token}
//! ${response.body.json(data.token)}
//! id=${user_id}
//! ${count.int()}
//! ```
//!
//! `CommandParser` discovers the placeholders in a template string, resolves
//! each command against the current exchange and the worker's variable
//! store, invokes a trailing extraction function when one is present, and
//! substitutes the results back into the template. A template that consists
//! of exactly one placeholder returns the resolved value with its native
//! type preserved; every other template resolves to text.
//!
//! The grammar is deliberately minimal: placeholders do not nest (the first
//! `}` terminates a placeholder), function arguments are split on commas
//! with no escaping, and there are no expressions or conditionals.

pub mod error;

pub use error::CommandError;

use crate::exchange::Exchange;
use crate::functions::Builtin;
use crate::models::{HttpRequest, HttpResponse, Value};
use crate::variables::VariableStore;
use once_cell::sync::Lazy;
use regex::Regex;

/// Cached pattern for `${...}` placeholder spans, non-greedy so the first
/// `}` after a `${` terminates the span.
static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{.*?\}").expect("Failed to compile placeholder regex"));

/// A trailing function call split off a command.
struct FunctionCall<'c> {
    /// Function name as written, e.g. `json`
    name: &'c str,
    /// Raw text between the parentheses, not yet split on commas
    raw_args: &'c str,
}

/// Resolves command placeholders against one worker's exchange and
/// variables.
///
/// The parser borrows the worker's context rather than owning it: the
/// transport layer keeps recording exchanges and step definitions keep
/// setting variables between resolutions.
pub struct CommandParser<'a> {
    exchange: &'a Exchange,
    variables: &'a VariableStore,
}

impl<'a> CommandParser<'a> {
    /// Creates a parser over the given worker context.
    ///
    /// # Arguments
    ///
    /// * `exchange` - The worker's current request/response pair
    /// * `variables` - The worker's variable store
    pub fn new(exchange: &'a Exchange, variables: &'a VariableStore) -> Self {
        Self {
            exchange,
            variables,
        }
    }

    /// Resolves every `${...}` placeholder in a template string.
    ///
    /// Placeholders are processed strictly in order of first occurrence.
    /// If the template consists of exactly one placeholder, the command's
    /// resolved value is returned with its native type preserved - this is
    /// the only way a non-text value leaves the parser. Otherwise each
    /// resolved value is stringified and substituted for the first
    /// occurrence of its span, and the final text is returned.
    ///
    /// A template with no placeholders is returned unchanged. An empty
    /// command (`${}`) resolves to the empty string and logs a warning.
    ///
    /// # Arguments
    ///
    /// * `template` - The input text containing zero or more placeholders
    ///
    /// # Returns
    ///
    /// The resolved value, or a `CommandError` for grammar-level failures
    /// (bad header path root, unknown function, missing exchange state).
    pub fn resolve(&self, template: &str) -> Result<Value, CommandError> {
        // Fast path: no placeholder markers at all
        if !template.contains("${") {
            return Ok(Value::text(template));
        }

        let mut working = template.to_string();
        for span in PLACEHOLDER_REGEX.find_iter(template) {
            let span_text = span.as_str();
            let command = &span_text[2..span_text.len() - 1];
            log::debug!("found embedded command {}", span_text);

            let value = self.resolve_command(command)?;
            log::debug!("resolved {} to '{}'", span_text, value);

            if span_text == template {
                // The placeholder is the whole template: hand back the
                // typed value instead of stringifying it.
                return Ok(value);
            }
            working = working.replacen(span_text, &value.to_string(), 1);
        }

        Ok(Value::Text(working))
    }

    /// Resolves the command text of a single placeholder.
    fn resolve_command(&self, command: &str) -> Result<Value, CommandError> {
        if command.is_empty() {
            log::warn!("empty command in placeholder");
            return Ok(Value::empty());
        }

        let (path, call) = split_function_call(command);
        let value = self.resolve_path(path)?;

        match call {
            Some(call) => self.invoke_function(value, &call),
            None => Ok(value),
        }
    }

    /// Resolves the path portion of a command to a value.
    ///
    /// The fixed `request.*` / `response.*` vocabulary reads the exchange;
    /// `<request|response>.header.<name>` looks up the named header; any
    /// other path is a variable name, and an undefined variable passes
    /// through verbatim so literal text can flow through a template
    /// unresolved.
    fn resolve_path(&self, path: &str) -> Result<Value, CommandError> {
        if path.is_empty() {
            return Ok(Value::empty());
        }

        let text = match path {
            "request" => self.request(path)?.to_string(),
            "request.url" => self.request(path)?.url.clone(),
            "request.url.host" => self
                .parsed_url(path)?
                .host_str()
                .unwrap_or_default()
                .to_string(),
            "request.url.query" => match self.parsed_url(path)?.query() {
                Some(query) => query.to_string(),
                None => {
                    log::warn!("request URL has no query string");
                    String::new()
                }
            },
            "request.url.path" => self.parsed_url(path)?.path().to_string(),
            "request.headers" => self.request(path)?.headers_text(),
            "response" => self.response(path)?.to_string(),
            "response.headers" => self.response(path)?.headers_text(),
            "response.body" => {
                self.response(path)?;
                self.exchange.response_body().unwrap_or_default().to_string()
            }
            "response.code" => self.response(path)?.status_code.to_string(),
            _ => return self.resolve_fallback_path(path),
        };

        Ok(Value::Text(text))
    }

    /// Resolves paths outside the fixed vocabulary: header indirection and
    /// the variable-store fallback.
    fn resolve_fallback_path(&self, path: &str) -> Result<Value, CommandError> {
        if let Some(idx) = path.rfind('.') {
            let stem = &path[..idx];
            let header_name = &path[idx + 1..];

            if stem == "request.header" {
                return Ok(Value::text(self.header_value(
                    self.request(path)?.header(header_name),
                    header_name,
                )));
            }
            if stem == "response.header" {
                return Ok(Value::text(self.header_value(
                    self.response(path)?.header(header_name),
                    header_name,
                )));
            }
            // Any other `<x>.header.<name>` shape is an authoring error,
            // not a variable name.
            if stem == "header" || stem.ends_with(".header") {
                log::error!("cannot resolve path '{}'", path);
                return Err(CommandError::UnresolvablePath {
                    path: path.to_string(),
                });
            }
        }

        match self.variables.get(path) {
            Some(value) => Ok(Value::text(value)),
            None => {
                // Pass-through: literal text flows on unresolved rather
                // than failing the whole template.
                log::debug!("no variable named '{}'; passing path through", path);
                Ok(Value::text(path))
            }
        }
    }

    /// A header lookup result, with the missing case mapped to the empty
    /// string.
    fn header_value(&self, value: Option<&str>, name: &str) -> String {
        match value {
            Some(v) => v.to_string(),
            None => {
                log::warn!("header '{}' is not present on the exchange", name);
                String::new()
            }
        }
    }

    /// Invokes a function call suffix with the path's value as implicit
    /// context.
    ///
    /// Unknown function names are fatal. A failure inside the function
    /// itself (bad JSON, bad pattern, wrong argument count) is logged and
    /// suppressed: the call yields the empty string and template resolution
    /// continues.
    fn invoke_function(
        &self,
        context: Value,
        call: &FunctionCall<'_>,
    ) -> Result<Value, CommandError> {
        let builtin = Builtin::lookup(call.name).ok_or_else(|| {
            log::error!("'{}' is not a known function", call.name);
            CommandError::UnknownFunction {
                name: call.name.to_string(),
            }
        })?;

        // Naive comma split, no escaping: arguments containing ',' or ')'
        // are a known limitation of the grammar.
        let mut args: Vec<String> = if call.raw_args.is_empty() {
            Vec::new()
        } else {
            call.raw_args.split(',').map(str::to_string).collect()
        };

        if builtin.takes_context() && !context.is_empty_text() {
            args.insert(0, context.to_string());
        }

        match builtin.invoke(&args) {
            Ok(value) => {
                log::debug!("function {}(..) returned '{}'", call.name, value);
                Ok(value)
            }
            Err(err) => {
                log::error!("function '{}' failed: {}", call.name, err);
                Ok(Value::empty())
            }
        }
    }

    fn request(&self, path: &str) -> Result<&HttpRequest, CommandError> {
        self.exchange
            .request()
            .ok_or_else(|| CommandError::MissingRequest {
                path: path.to_string(),
            })
    }

    fn response(&self, path: &str) -> Result<&HttpResponse, CommandError> {
        self.exchange
            .response()
            .ok_or_else(|| CommandError::MissingResponse {
                path: path.to_string(),
            })
    }

    fn parsed_url(&self, path: &str) -> Result<url::Url, CommandError> {
        let request = self.request(path)?;
        request
            .parsed_url()
            .map_err(|e| CommandError::InvalidUrl {
                url: request.url.clone(),
                reason: e.to_string(),
            })
    }
}

/// Splits a trailing function call off a command.
///
/// A command ends in a function call when its last character is `)`. The
/// text up to the first `(` is taken, its last dotted segment names the
/// function, and everything before that segment remains the path (empty
/// when the call is the whole command). The raw argument text runs from the
/// first `(` to the last `)`.
fn split_function_call(command: &str) -> (&str, Option<FunctionCall<'_>>) {
    if !command.ends_with(')') {
        return (command, None);
    }
    let open = match command.find('(') {
        Some(idx) => idx,
        // A ')' with no '(' is not a call; let the path fallback handle it
        None => return (command, None),
    };

    let pre = &command[..open];
    let name_start = pre.rfind('.').map(|idx| idx + 1).unwrap_or(0);
    let name = &command[name_start..open];

    let close = command.rfind(')').unwrap_or(command.len() - 1);
    let raw_args = if close > open + 1 {
        &command[open + 1..close]
    } else {
        ""
    };

    let path = if name_start == 0 {
        ""
    } else {
        &command[..name_start - 1]
    };

    (path, Some(FunctionCall { name, raw_args }))
}

/// Replaces `?` markers in a template with positional arguments.
///
/// Independent of the `${}` grammar: each argument in turn replaces the
/// first remaining `?` character, in document order. Extra arguments are
/// ignored; if there are fewer arguments than markers, the remaining `?`
/// characters are left unchanged.
///
/// # Arguments
///
/// * `template` - Text containing `?` markers
/// * `args` - Replacement values, consumed one per marker
///
/// # Examples
///
/// ```
/// use apitest_interpreter::parser::substitute_positional;
///
/// assert_eq!(substitute_positional("a=?&b=?", &["1", "2"]), "a=1&b=2");
/// ```
pub fn substitute_positional(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for arg in args {
        match result.find('?') {
            Some(idx) => result.replace_range(idx..idx + 1, arg),
            None => break,
        }
    }
    result
}
