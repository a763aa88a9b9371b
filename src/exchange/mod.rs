//! The current request/response exchange of a test worker.
//!
//! Each test worker owns one `Exchange`. The transport layer records the
//! request it is about to send and the response it received; the command
//! interpreter reads both back when resolving `request.*` and `response.*`
//! paths. The response body text is materialized once, when the response is
//! recorded, so repeated `response.body` commands never re-decode it.
//!
//! Exchanges are never shared across workers; concurrent test cases each
//! carry their own instance, which is why nothing here needs a lock.

use crate::models::{HttpRequest, HttpResponse};

/// The request/response pair of the active test step.
#[derive(Debug, Clone, Default)]
pub struct Exchange {
    request: Option<HttpRequest>,
    response: Option<HttpResponse>,
    response_body: Option<String>,
}

impl Exchange {
    /// Creates an empty exchange with no request or response recorded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the request of the current step, replacing any previous one.
    ///
    /// Recording a new request also discards the previous response and its
    /// body text; they belonged to the step that just ended.
    pub fn set_request(&mut self, request: HttpRequest) {
        log::debug!("exchange: recording request {}", request);
        self.request = Some(request);
        self.response = None;
        self.response_body = None;
    }

    /// Records the response of the current step and materializes its body
    /// text.
    pub fn set_response(&mut self, response: HttpResponse) {
        log::debug!("exchange: recording response {}", response);
        self.response_body = Some(response.body_text());
        self.response = Some(response);
    }

    /// The current request, if one has been recorded.
    pub fn request(&self) -> Option<&HttpRequest> {
        self.request.as_ref()
    }

    /// The current response, if one has been recorded.
    pub fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    /// The materialized body text of the current response.
    pub fn response_body(&self) -> Option<&str> {
        self.response_body.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HttpMethod;

    #[test]
    fn test_empty_exchange() {
        let exchange = Exchange::new();
        assert!(exchange.request().is_none());
        assert!(exchange.response().is_none());
        assert!(exchange.response_body().is_none());
    }

    #[test]
    fn test_set_request_and_response() {
        let mut exchange = Exchange::new();
        exchange.set_request(HttpRequest::new(HttpMethod::GET, "https://example.com"));

        let mut response = HttpResponse::new(200, "OK");
        response.set_body(b"hello".to_vec());
        exchange.set_response(response);

        assert_eq!(exchange.request().unwrap().url, "https://example.com");
        assert_eq!(exchange.response().unwrap().status_code, 200);
        assert_eq!(exchange.response_body(), Some("hello"));
    }

    #[test]
    fn test_new_request_discards_previous_response() {
        let mut exchange = Exchange::new();
        exchange.set_request(HttpRequest::new(HttpMethod::GET, "https://example.com/a"));

        let mut response = HttpResponse::new(200, "OK");
        response.set_body(b"first".to_vec());
        exchange.set_response(response);

        exchange.set_request(HttpRequest::new(HttpMethod::GET, "https://example.com/b"));
        assert!(exchange.response().is_none());
        assert!(exchange.response_body().is_none());
    }
}
