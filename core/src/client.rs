//! Place details request builder, response mapper, and async retrieval.
//!
//! # Design
//! `PlacesClient` holds a transport and the endpoint URL and carries no
//! mutable state between calls. A lookup is split into `build_details`
//! (produces an `HttpRequest`) and `parse_details` (consumes an
//! `HttpResponse`); `retrieve` runs the transport in between. Callers with
//! their own HTTP stack can drive the two halves directly.

use std::collections::HashMap;

use tracing::{debug, instrument, warn};

use crate::error::{ApiError, TransportError};
use crate::http::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::types::{AddressComponent, DetailsResponse, DetailsResult, Place, PlaceQuery, PlaceType};

/// Google Places details endpoint.
pub const DETAILS_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/place/details/json";

static EMPTY_COMPONENT: AddressComponent = AddressComponent::EMPTY;

/// Stateless client for the place details endpoint.
#[derive(Debug, Clone)]
pub struct PlacesClient<T = ReqwestTransport> {
    transport: T,
    endpoint: String,
}

impl Default for PlacesClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new(ReqwestTransport::new())
    }
}

impl<T> PlacesClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            endpoint: DETAILS_ENDPOINT.to_string(),
        }
    }

    /// Point the client at a different details URL (a proxy or a mock).
    pub fn with_endpoint(transport: T, endpoint: &str) -> Self {
        Self {
            transport,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_details(&self, query: &PlaceQuery) -> HttpRequest {
        let mut params = vec![
            ("placeid".to_string(), query.id.clone()),
            ("key".to_string(), query.key.clone()),
        ];
        if let Some(language) = &query.language {
            params.push(("language".to_string(), language.clone()));
        }

        HttpRequest {
            url: self.endpoint.clone(),
            query: params,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn parse_details(&self, response: HttpResponse) -> Result<Place, ApiError> {
        check_status(&response)?;
        let envelope: DetailsResponse =
            serde_json::from_str(&response.body).map_err(TransportError::from)?;

        if envelope.status != "OK" {
            warn!(status = %envelope.status, "upstream rejected lookup");
            return Err(ApiError::ResponseStatus {
                status: envelope.status,
                message: envelope.error_message,
            });
        }

        let raw = envelope.result.ok_or(ApiError::MissingResult)?;
        let result: DetailsResult =
            serde_json::from_value(raw).map_err(|e| ApiError::MalformedResult(e.to_string()))?;
        map_result(result)
    }
}

impl<T: Transport> PlacesClient<T> {
    /// Fetch one place and reshape it into a `Place`.
    #[instrument(skip(self, query), fields(place_id = %query.id, language = ?query.language))]
    pub async fn retrieve(&self, query: &PlaceQuery) -> Result<Place, ApiError> {
        let request = self.build_details(query);
        let response = self.transport.execute(request).await?;
        let place = self.parse_details(response)?;
        debug!(address = %place.address, "place retrieved");
        Ok(place)
    }
}

/// Reject non-2xx responses before looking at the body.
fn check_status(response: &HttpResponse) -> Result<(), TransportError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(TransportError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}

fn map_result(result: DetailsResult) -> Result<Place, ApiError> {
    let id = result
        .place_id
        .ok_or_else(|| ApiError::MalformedResult("missing place_id".to_string()))?;
    let address = result
        .formatted_address
        .ok_or_else(|| ApiError::MalformedResult("missing formatted_address".to_string()))?;
    let location = result
        .geometry
        .and_then(|g| g.location)
        .ok_or_else(|| ApiError::MalformedResult("missing geometry.location".to_string()))?;

    let components = result.address_components.unwrap_or_default();
    let table = ComponentTable::new(&components);

    let locality = table.get(PlaceType::Locality);
    let area1 = table.get(PlaceType::AdministrativeAreaLevel1);
    let area2 = table.get(PlaceType::AdministrativeAreaLevel2);
    let country = table.get(PlaceType::Country);

    Ok(Place {
        id,
        address,
        location,
        locality: locality.preferred_name().to_string(),
        administrative_area_level1: area1.preferred_name().to_string(),
        administrative_area_level2: area2.preferred_name().to_string(),
        country_code: country.short_name.clone(),
        country: country.long_name.clone(),
        postal_code: table.get(PlaceType::PostalCode).long_name.clone(),
        street_number: table.get(PlaceType::StreetNumber).short_name.clone(),
        route: table.get(PlaceType::Route).long_name.clone(),
    })
}

/// First component carrying each recognized tag.
struct ComponentTable<'a> {
    by_type: HashMap<PlaceType, &'a AddressComponent>,
}

impl<'a> ComponentTable<'a> {
    fn new(components: &'a [AddressComponent]) -> Self {
        let mut by_type = HashMap::new();
        for component in components {
            for tag in &component.types {
                if let Ok(place_type) = tag.parse::<PlaceType>() {
                    by_type.entry(place_type).or_insert(component);
                }
            }
        }
        Self { by_type }
    }

    fn get(&self, place_type: PlaceType) -> &'a AddressComponent {
        self.by_type
            .get(&place_type)
            .copied()
            .unwrap_or(&EMPTY_COMPONENT)
    }
}
