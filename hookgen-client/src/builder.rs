//! Introspection client and builder.

use crate::error::ClientError;
use crate::introspection::INTROSPECTION_QUERY;
use hookgen_schema::Schema;
use serde::Serialize;
use std::time::Duration;

/// Request body for a GraphQL HTTP POST.
#[derive(Debug, Serialize)]
struct IntrospectionRequest {
    query: &'static str,
}

/// Client for fetching a schema from a GraphQL endpoint.
///
/// Posts the introspection query as JSON and parses the response body into
/// the typed schema model.
pub struct IntrospectionClient {
    endpoint: String,
    headers: Vec<(String, String)>,
    timeout: Duration,
}

impl IntrospectionClient {
    /// Creates a client for the specified GraphQL endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            headers: Vec::new(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Adds a header sent with the introspection request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Posts the introspection query and parses the response.
    ///
    /// # Errors
    /// Returns `ClientError` if the request fails, the server answers with a
    /// non-success status, or the body is not a usable introspection result.
    pub async fn introspect(&self) -> Result<Schema, ClientError> {
        let request = IntrospectionRequest {
            query: INTROSPECTION_QUERY,
        };

        let client = reqwest::Client::builder().timeout(self.timeout).build()?;

        let mut request_builder = client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(&request);

        for (name, value) in &self.headers {
            request_builder = request_builder.header(name, value);
        }

        tracing::debug!("introspecting {}", self.endpoint);

        let response = request_builder.send().await?.error_for_status()?;
        let body = response.text().await?;

        Ok(hookgen_schema::parse_introspection(&body)?)
    }
}

/// Fetches a schema from the given endpoint with default settings.
///
/// # Errors
/// Returns `ClientError` if the fetch or parse fails.
pub async fn introspect(url: &str) -> Result<Schema, ClientError> {
    IntrospectionClient::new(url).introspect().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_carries_query() {
        let request = IntrospectionRequest {
            query: INTROSPECTION_QUERY,
        };

        let body = serde_json::to_value(&request).unwrap();
        let query = body["query"].as_str().unwrap();
        assert!(query.contains("__schema"));
    }

    #[test]
    fn test_builder_accumulates_headers() {
        let client = IntrospectionClient::new("http://localhost:4000/graphql")
            .header("Authorization", "Bearer token")
            .header("X-Tenant", "acme")
            .timeout(Duration::from_secs(5));

        assert_eq!(client.headers.len(), 2);
        assert_eq!(client.timeout, Duration::from_secs(5));
    }
}
