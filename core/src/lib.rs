//! Async client for the Google Places details endpoint.
//!
//! # Overview
//! Fetches one place by id and reshapes the upstream JSON into a flat
//! `Place` record: formatted address, coordinates, and the seven address
//! components callers usually care about (street number, route, locality,
//! two administrative levels, country, postal code).
//!
//! # Design
//! - `PlacesClient` is stateless apart from its transport and endpoint.
//! - A lookup is split into `build_details` (produces `HttpRequest`) and
//!   `parse_details` (consumes `HttpResponse`), so the I/O boundary is
//!   explicit and the mapping is testable without a network.
//! - The network half is the `Transport` trait; `ReqwestTransport` is the
//!   default, tests inject their own.
//! - Exactly one request per lookup. No retries, caching or batching.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{PlacesClient, DETAILS_ENDPOINT};
pub use error::{ApiError, TransportError};
pub use http::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use types::{AddressComponent, LatLng, Place, PlaceQuery, PlaceType};

/// Look up a place with a fresh `ReqwestTransport` against the default
/// endpoint.
pub async fn retrieve(query: &PlaceQuery) -> Result<Place, ApiError> {
    PlacesClient::<ReqwestTransport>::default()
        .retrieve(query)
        .await
}
