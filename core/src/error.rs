//! Error types for the place details client.
//!
//! # Design
//! `TransportError` covers everything that goes wrong before a JSON document
//! is in hand. `ApiError` adds the failures of interpreting that document.
//! None of them are retried; every one aborts the lookup.

use thiserror::Error;

/// Failures in the HTTP layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response (connect, TLS, body read).
    /// The URL is stripped so the API key never ends up in messages.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The body is not a JSON details envelope.
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Errors returned by `PlacesClient::retrieve` and `PlacesClient::parse_details`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The upstream `status` field was not `"OK"`.
    #[error("unexpected retrieve result: {status}{}", detail(.message))]
    ResponseStatus {
        status: String,
        message: Option<String>,
    },

    /// Status was `"OK"` but no `result` object came back.
    #[error("result is missing")]
    MissingResult,

    /// A field the mapper dereferences is absent or has the wrong shape.
    #[error("malformed result: {0}")]
    MalformedResult(String),
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(" ({m})"),
        None => String::new(),
    }
}
