//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors, optionally after a delay, and records every request.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Method key that matches any HTTP verb.
const ANY_METHOD: &str = "*";

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET, POST, PUT or DELETE)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST and PUT requests)
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// Responses are matched by method and URL. Exact matches win over prefix
/// matches, method-specific entries win over method-agnostic ones, and the
/// longest matching prefix wins among prefixes.
///
/// # Example
///
/// ```ignore
/// use abd_admin::adapters::mock::{MockHttpClient, MockResponse};
/// use abd_admin::traits::{HttpClient, Response, Headers};
///
/// let client = MockHttpClient::new();
/// client.set_method_response(
///     "DELETE",
///     "https://api.a-b-d.ru/admin/tariffs/3",
///     MockResponse::Success(Response::new(204, Default::default())),
/// );
///
/// client.delete("https://api.a-b-d.ru/admin/tariffs/3", &Headers::new()).await?;
/// assert_eq!(client.get_requests()[0].method, "DELETE");
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured responses keyed by (method, url pattern)
    responses: Arc<Mutex<HashMap<(String, String), MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Artificial latency per exact URL
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            delays: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a response for a URL regardless of method.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.set_method_response(ANY_METHOD, url, response);
    }

    /// Set a response for a specific method and URL.
    pub fn set_method_response(&self, method: &str, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert((method.to_string(), url.to_string()), response);
    }

    /// Respond with `status` and a JSON body for `method` + `url`.
    pub fn set_json(&self, method: &str, url: &str, status: u16, body: serde_json::Value) {
        self.set_method_response(
            method,
            url,
            MockResponse::Success(Response::json_body(status, &body)),
        );
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Delay every response for the exact `url` by `delay`.
    pub fn set_delay(&self, url: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(url.to_string(), delay);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get recorded requests for one method.
    pub fn requests_with_method(&self, method: &str) -> Vec<RecordedRequest> {
        self.get_requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    /// Clear all configured responses.
    pub fn clear_responses(&self) {
        self.responses.lock().unwrap().clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn get_response(&self, method: &str, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();

        for key in [method, ANY_METHOD] {
            if let Some(response) = responses.get(&(key.to_string(), url.to_string())) {
                return Some(response.clone());
            }
        }

        for key in [method, ANY_METHOD] {
            let best = responses
                .iter()
                .filter(|((m, pattern), _)| m == key && url.starts_with(pattern.as_str()))
                .max_by_key(|((_, pattern), _)| pattern.len());
            if let Some((_, response)) = best {
                return Some(response.clone());
            }
        }

        let default = self.default_response.lock().unwrap();
        default.clone()
    }

    async fn respond(
        &self,
        method: &str,
        url: &str,
        headers: &Headers,
        body: Option<String>,
    ) -> Result<Response, HttpError> {
        self.record_request(method, url, headers, body);

        let delay = self.delays.lock().unwrap().get(url).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match self.get_response(method, url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "No mock response for {} {}",
                method, url
            ))),
        }
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.respond("GET", url, headers, None).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.respond("POST", url, headers, Some(body.to_string()))
            .await
    }

    async fn put(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.respond("PUT", url, headers, Some(body.to_string()))
            .await
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.respond("DELETE", url, headers, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_mock_http_client_new() {
        let client = MockHttpClient::new();
        assert!(client.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_get_with_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/admin/users/1",
            MockResponse::Success(Response::new(200, Bytes::from("Hello"))),
        );

        let response = client
            .get("https://example.com/admin/users/1", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, Bytes::from("Hello"));

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
    }

    #[tokio::test]
    async fn test_method_specific_response_wins() {
        let client = MockHttpClient::new();
        let url = "https://example.com/admin/tariffs/3";
        client.set_json("GET", url, 200, serde_json::json!({"id": 3}));
        client.set_method_response(
            "DELETE",
            url,
            MockResponse::Success(Response::new(204, Bytes::new())),
        );

        let get = client.get(url, &Headers::new()).await.unwrap();
        let delete = client.delete(url, &Headers::new()).await.unwrap();

        assert_eq!(get.status, 200);
        assert_eq!(delete.status, 204);
    }

    #[tokio::test]
    async fn test_longest_prefix_wins() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/admin/",
            MockResponse::Success(Response::new(404, Bytes::new())),
        );
        client.set_response(
            "https://example.com/admin/settings/",
            MockResponse::Success(Response::new(200, Bytes::new())),
        );

        let response = client
            .get("https://example.com/admin/settings/?page=1&size=20", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_put_records_body() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(200, Bytes::new())));

        client
            .put("https://example.com/admin/settings/2", r#"{"value":"on"}"#, &Headers::new())
            .await
            .unwrap();

        let requests = client.requests_with_method("PUT");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].body, Some(r#"{"value":"on"}"#.to_string()));
    }

    #[tokio::test]
    async fn test_error_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/down",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let result = client.get("https://example.com/down", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_no_response_configured() {
        let client = MockHttpClient::new();
        let result = client
            .get("https://example.com/missing", &Headers::new())
            .await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_delay_is_applied() {
        let client = MockHttpClient::new();
        let url = "https://example.com/slow";
        client.set_default_response(MockResponse::Success(Response::new(200, Bytes::new())));
        client.set_delay(url, Duration::from_millis(40));

        let started = tokio::time::Instant::now();
        client.get(url, &Headers::new()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn test_clear_requests() {
        let client = MockHttpClient::new();
        client.record_request("GET", "https://example.com", &Headers::new(), None);
        assert_eq!(client.get_requests().len(), 1);

        client.clear_requests();
        assert!(client.get_requests().is_empty());
    }
}
