//! Error types for command resolution.
//!
//! These are the grammar-level failures of the command language: they
//! indicate an authoring defect in the test specification (a bad path root,
//! a function name that does not exist, a sequencing mistake) and abort the
//! current template resolution. Function-level failures are handled
//! separately and never surface here.

use std::fmt;

/// Errors that abort resolution of the current template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A `<x>.header.<name>` path whose root is neither `request` nor
    /// `response`.
    UnresolvablePath {
        /// The offending path text
        path: String,
    },

    /// A function call used a name the dispatch table does not know.
    UnknownFunction {
        /// The unknown function name
        name: String,
    },

    /// A `request.*` path was resolved before any request was recorded on
    /// the exchange.
    MissingRequest {
        /// The path that needed a request
        path: String,
    },

    /// A `response.*` path was resolved before any response was recorded on
    /// the exchange.
    MissingResponse {
        /// The path that needed a response
        path: String,
    },

    /// A `request.url.*` path was resolved but the request's URL text does
    /// not parse.
    InvalidUrl {
        /// The URL text that failed to parse
        url: String,
        /// Parser diagnostic
        reason: String,
    },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnresolvablePath { path } => {
                write!(
                    f,
                    "Unresolvable path '{}'. Header lookups must be rooted at 'request.header' or 'response.header'",
                    path
                )
            }
            CommandError::UnknownFunction { name } => {
                write!(
                    f,
                    "'{}' is not a function. Known functions: json, int, double, regex",
                    name
                )
            }
            CommandError::MissingRequest { path } => {
                write!(
                    f,
                    "Cannot resolve '{}': no request has been recorded for this step",
                    path
                )
            }
            CommandError::MissingResponse { path } => {
                write!(
                    f,
                    "Cannot resolve '{}': no response has been recorded for this step",
                    path
                )
            }
            CommandError::InvalidUrl { url, reason } => {
                write!(f, "Cannot parse request URL '{}': {}", url, reason)
            }
        }
    }
}

impl std::error::Error for CommandError {}
