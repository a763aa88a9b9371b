//! HTTP request data model.
//!
//! This module defines the request side of the exchange the command
//! interpreter resolves paths against. It carries exactly what path
//! resolution needs: the method, the URL text, headers, and an optional body.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// HTTP request method.
///
/// Represents all standard HTTP methods as defined in RFC 7231 and RFC 5789.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    /// HTTP GET method - retrieve a resource
    GET,
    /// HTTP POST method - submit data to create a resource
    POST,
    /// HTTP PUT method - replace a resource
    PUT,
    /// HTTP DELETE method - remove a resource
    DELETE,
    /// HTTP PATCH method - partially modify a resource
    PATCH,
    /// HTTP OPTIONS method - describe communication options
    OPTIONS,
    /// HTTP HEAD method - retrieve headers only
    HEAD,
    /// HTTP TRACE method - perform a message loop-back test
    TRACE,
    /// HTTP CONNECT method - establish a tunnel to the server
    CONNECT,
}

impl HttpMethod {
    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::OPTIONS => "OPTIONS",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::TRACE => "TRACE",
            HttpMethod::CONNECT => "CONNECT",
        }
    }

    /// Parses a string into an HttpMethod.
    ///
    /// # Arguments
    ///
    /// * `s` - A string slice representing the HTTP method
    ///
    /// # Returns
    ///
    /// `Some(HttpMethod)` if the string is a valid HTTP method, `None` otherwise.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(HttpMethod::GET),
            "POST" => Some(HttpMethod::POST),
            "PUT" => Some(HttpMethod::PUT),
            "DELETE" => Some(HttpMethod::DELETE),
            "PATCH" => Some(HttpMethod::PATCH),
            "OPTIONS" => Some(HttpMethod::OPTIONS),
            "HEAD" => Some(HttpMethod::HEAD),
            "TRACE" => Some(HttpMethod::TRACE),
            "CONNECT" => Some(HttpMethod::CONNECT),
            _ => None,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the HTTP request of the current test step.
///
/// The URL is stored as text and decomposed (host, query, encoded path) on
/// demand during path resolution, so a request can be recorded before its
/// URL has been validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, PUT, DELETE, etc.).
    pub method: HttpMethod,

    /// Target URL for the request, as written in the test specification.
    pub url: String,

    /// Request headers as key-value pairs.
    ///
    /// Header names are case-insensitive but are stored as provided.
    pub headers: HashMap<String, String>,

    /// Optional request body.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a new HttpRequest with the given method and URL.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `url` - Target URL
    ///
    /// # Returns
    ///
    /// A new `HttpRequest` with no headers and no body.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Adds a header to the request.
    ///
    /// # Arguments
    ///
    /// * `name` - Header name
    /// * `value` - Header value
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Sets the request body.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = Some(body.into());
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

    /// Parses the URL text into its structured form.
    ///
    /// Path resolution decomposes the URL (host, query, encoded path) through
    /// this; the parse is deferred until a command actually asks for a URL
    /// component.
    pub fn parsed_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.url)
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
}

impl std::fmt::Display for HttpRequest {
    /// The request's text form: the request line without a version, e.g.
    /// `GET https://api.example.com/users`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_as_str() {
        assert_eq!(HttpMethod::GET.as_str(), "GET");
        assert_eq!(HttpMethod::POST.as_str(), "POST");
        assert_eq!(HttpMethod::DELETE.as_str(), "DELETE");
    }

    #[test]
    fn test_http_method_from_str() {
        assert_eq!(HttpMethod::from_str("GET"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::from_str("get"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::from_str("Post"), Some(HttpMethod::POST));
        assert_eq!(HttpMethod::from_str("INVALID"), None);
    }

    #[test]
    fn test_request_text_form() {
        let request = HttpRequest::new(HttpMethod::GET, "https://api.example.com/users");
        assert_eq!(request.to_string(), "GET https://api.example.com/users");
    }

    #[test]
    fn test_header_lookup_case_insensitive() {
        let mut request = HttpRequest::new(HttpMethod::POST, "https://api.example.com");
        request.add_header("Content-Type", "application/json");

        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(request.header("X-Missing"), None);
    }

    #[test]
    fn test_headers_text_sorted() {
        let mut request = HttpRequest::new(HttpMethod::GET, "https://api.example.com");
        request.add_header("X-Trace", "abc");
        request.add_header("Accept", "application/json");

        assert_eq!(
            request.headers_text(),
            "Accept: application/json\nX-Trace: abc\n"
        );
    }

    #[test]
    fn test_parsed_url_components() {
        let request = HttpRequest::new(
            HttpMethod::GET,
            "https://api.example.com/v1/users?page=2&limit=10",
        );
        let url = request.parsed_url().unwrap();

        assert_eq!(url.host_str(), Some("api.example.com"));
        assert_eq!(url.query(), Some("page=2&limit=10"));
        assert_eq!(url.path(), "/v1/users");
    }

    #[test]
    fn test_parsed_url_invalid() {
        let request = HttpRequest::new(HttpMethod::GET, "not a url");
        assert!(request.parsed_url().is_err());
    }

    #[test]
    fn test_serialization() {
        let mut request = HttpRequest::new(HttpMethod::PUT, "https://api.example.com/items/1");
        request.set_body(r#"{"name": "x"}"#);

        let json = serde_json::to_string(&request).unwrap();
        let deserialized: HttpRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.method, request.method);
        assert_eq!(deserialized.url, request.url);
        assert_eq!(deserialized.body, request.body);
    }
}
