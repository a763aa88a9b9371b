//! HTTP response data model.
//!
//! This module defines the response side of the exchange the command
//! interpreter resolves paths against: status information, headers, and the
//! response body.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents the HTTP response of the current test step.
///
/// The body is kept as raw bytes to support binary responses; the
/// interpreter reads it through the exchange's materialized text form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpResponse {
    /// HTTP status code (e.g., 200, 404, 500).
    pub status_code: u16,

    /// HTTP status text (e.g., "OK", "Not Found").
    pub status_text: String,

    /// Response headers as key-value pairs.
    pub headers: HashMap<String, String>,

    /// Response body as raw bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HttpResponse with the given status code and text.
    ///
    /// # Arguments
    ///
    /// * `status_code` - HTTP status code
    /// * `status_text` - HTTP status text description
    ///
    /// # Returns
    ///
    /// A new `HttpResponse` with no headers and an empty body.
    pub fn new(status_code: u16, status_text: impl Into<String>) -> Self {
        Self {
            status_code,
            status_text: status_text.into(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Adds a header to the response.
    ///
    /// # Arguments
    ///
    /// * `name` - Header name
    /// * `value` - Header value
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Sets the response body from raw bytes.
    pub fn set_body(&mut self, body: Vec<u8>) {
        self.body = body;
    }

    /// Returns the body decoded as UTF-8 text, replacing invalid sequences.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Looks up a header value by name, case-insensitively.
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the header value, or `None` if the header is absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Renders the header collection as text, one `Name: value` line per
    /// header, sorted by name for a stable output.
    pub fn headers_text(&self) -> String {
        let mut entries: Vec<_> = self.headers.iter().collect();
        entries.sort_by_key(|(k, _)| k.as_str());
        entries
            .iter()
            .map(|(k, v)| format!("{}: {}\n", k, v))
            .collect()
    }

    /// Checks if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

impl std::fmt::Display for HttpResponse {
    /// The response's text form: a status line, e.g. `HTTP/1.1 200 OK`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP/1.1 {} {}", self.status_code, self.status_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_form() {
        let response = HttpResponse::new(404, "Not Found");
        assert_eq!(response.to_string(), "HTTP/1.1 404 Not Found");
    }

    #[test]
    fn test_body_text() {
        let mut response = HttpResponse::new(200, "OK");
        response.set_body(br#"{"token": "abc123"}"#.to_vec());
        assert_eq!(response.body_text(), r#"{"token": "abc123"}"#);
    }

    #[test]
    fn test_body_text_lossy() {
        let mut response = HttpResponse::new(200, "OK");
        response.set_body(vec![0x61, 0xff, 0x62]);
        assert_eq!(response.body_text(), "a\u{FFFD}b");
    }

    #[test]
    fn test_header_lookup_case_insensitive() {
        let mut response = HttpResponse::new(200, "OK");
        response.add_header("X-Trace", "abc123");

        assert_eq!(response.header("x-trace"), Some("abc123"));
        assert_eq!(response.header("X-TRACE"), Some("abc123"));
        assert_eq!(response.header("X-Other"), None);
    }

    #[test]
    fn test_headers_text_sorted() {
        let mut response = HttpResponse::new(200, "OK");
        response.add_header("Set-Cookie", "sid=1");
        response.add_header("Content-Type", "application/json");

        assert_eq!(
            response.headers_text(),
            "Content-Type: application/json\nSet-Cookie: sid=1\n"
        );
    }

    #[test]
    fn test_is_success() {
        assert!(HttpResponse::new(200, "OK").is_success());
        assert!(HttpResponse::new(204, "No Content").is_success());
        assert!(!HttpResponse::new(301, "Moved Permanently").is_success());
        assert!(!HttpResponse::new(500, "Internal Server Error").is_success());
    }
}
