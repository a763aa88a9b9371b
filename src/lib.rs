//! Command expression interpreter for API test specifications.
//!
//! Test authors embed `${...}` commands in the strings of their test
//! specifications and have them resolved at run time against the most
//! recent HTTP request/response exchange, against named test variables, and
//! against a small fixed set of extraction functions:
//!
//! ```text
//! ${response.header.X-Auth-Token}        header of the current response
//! ${request.url.host}                    component of the current request URL
//! ${response.body.json(data.token)}      JSON path extraction over the body
//! ${response.body.regex(code=(.*?)&)}    regex capture extraction
//! ${count.int()}                         variable lookup + integer conversion
//! id=${user_id}                          variable substitution inside text
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - **models**: HTTP request/response data structures and the tagged
//!   `Value` type resolution produces
//! - **exchange**: the per-worker current request/response pair the
//!   `request.*` and `response.*` paths read from
//! - **variables**: the per-worker variable store and its `vars.json`
//!   seed-file loader
//! - **functions**: the `json`, `regex`, `int` and `double` builtins behind
//!   the fixed dispatch table
//! - **parser**: placeholder discovery, command resolution, function
//!   invocation, and positional `?` substitution
//!
//! # Resolution semantics
//!
//! Placeholders resolve strictly left to right. A template that consists of
//! exactly one placeholder returns the resolved value with its native type
//! (`${count.int()}` is an integer, not the string `"42"`); any other
//! template resolves to text. Paths outside the fixed `request.*` /
//! `response.*` vocabulary fall back to the variable store, and an
//! undefined variable passes through verbatim instead of failing the
//! template.
//!
//! # Concurrency
//!
//! One `Exchange` and one `VariableStore` per test worker, passed into
//! `CommandParser` by reference. Nothing is shared across workers, so
//! resolution needs no synchronization; the function dispatch table is
//! read-only.
//!
//! # Example
//!
//! ```
//! use apitest_interpreter::{
//!     CommandParser, Exchange, HttpMethod, HttpRequest, HttpResponse, VariableStore,
//! };
//!
//! let mut exchange = Exchange::new();
//! exchange.set_request(HttpRequest::new(HttpMethod::POST, "https://api.example.com/login"));
//!
//! let mut response = HttpResponse::new(200, "OK");
//! response.set_body(br#"{"data":{"token":"tk-1"}}"#.to_vec());
//! exchange.set_response(response);
//!
//! let mut variables = VariableStore::new();
//! variables.set("user_id", "7");
//!
//! let parser = CommandParser::new(&exchange, &variables);
//! let value = parser
//!     .resolve("id=${user_id}&token=${response.body.json(data.token)}")
//!     .unwrap();
//! assert_eq!(value.to_string(), "id=7&token=tk-1");
//! ```

pub mod exchange;
pub mod functions;
pub mod models;
pub mod parser;
pub mod variables;

pub use exchange::Exchange;
pub use functions::{Builtin, FunctionError};
pub use models::{HttpMethod, HttpRequest, HttpResponse, Value};
pub use parser::{substitute_positional, CommandError, CommandParser};
pub use variables::{LoadError, VariableStore};
