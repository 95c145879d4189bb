//! HTTP transport for the place details client.
//!
//! # Design
//! Requests and responses are plain data. `PlacesClient` builds an
//! `HttpRequest`, something that implements `Transport` executes it, and the
//! resulting `HttpResponse` goes back to the client for parsing. Tests swap
//! in their own `Transport` instead of patching the network layer.

use std::future::Future;

use tracing::debug;

use crate::error::TransportError;

/// A GET request described as plain data.
///
/// `query` holds only the parameters that are set; unset optional values are
/// left out entirely rather than sent empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes an `HttpRequest` against the network (or a stand-in for it).
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// `Transport` backed by an async `reqwest::Client`.
///
/// No retries and no timeout beyond what the supplied client is configured
/// with.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(url = %request.url, "sending request");

        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        // reqwest errors carry the full URL, key included.
        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Request(e.without_url()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.without_url()))?;

        Ok(HttpResponse { status, body })
    }
}
