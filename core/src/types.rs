//! Domain types for the place details client.
//!
//! # Design
//! `PlaceQuery` and `Place` are the caller-facing input and output. The
//! `Details*` structs mirror the upstream JSON and stay close to its
//! snake_case naming; `Place` serializes in camelCase so it can be handed to
//! JSON consumers unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Parameters for a single place details lookup.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceQuery {
    pub id: String,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl PlaceQuery {
    pub fn new(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            language: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl fmt::Debug for PlaceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceQuery")
            .field("id", &self.id)
            .field("key", &"<redacted>")
            .field("language", &self.language)
            .finish()
    }
}

/// A tagged fragment of a geocoded address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponent {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    /// Component substituted when no upstream component carries a tag.
    pub const EMPTY: AddressComponent = AddressComponent {
        long_name: String::new(),
        short_name: String::new(),
        types: Vec::new(),
    };

    pub fn has_type(&self, place_type: PlaceType) -> bool {
        self.types.iter().any(|t| t == place_type.as_str())
    }

    /// `long_name`, or `short_name` when the long form is empty.
    pub fn preferred_name(&self) -> &str {
        if self.long_name.is_empty() {
            &self.short_name
        } else {
            &self.long_name
        }
    }
}

/// Address component tags the mapper extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceType {
    StreetNumber,
    Route,
    Locality,
    #[serde(rename = "administrative_area_level_1")]
    AdministrativeAreaLevel1,
    #[serde(rename = "administrative_area_level_2")]
    AdministrativeAreaLevel2,
    Country,
    PostalCode,
}

impl PlaceType {
    pub const ALL: [PlaceType; 7] = [
        PlaceType::StreetNumber,
        PlaceType::Route,
        PlaceType::Locality,
        PlaceType::AdministrativeAreaLevel1,
        PlaceType::AdministrativeAreaLevel2,
        PlaceType::Country,
        PlaceType::PostalCode,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlaceType::StreetNumber => "street_number",
            PlaceType::Route => "route",
            PlaceType::Locality => "locality",
            PlaceType::AdministrativeAreaLevel1 => "administrative_area_level_1",
            PlaceType::AdministrativeAreaLevel2 => "administrative_area_level_2",
            PlaceType::Country => "country",
            PlaceType::PostalCode => "postal_code",
        }
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a tag outside the recognized set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized place type: {0}")]
pub struct UnknownPlaceType(pub String);

impl FromStr for PlaceType {
    type Err = UnknownPlaceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlaceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownPlaceType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Normalized address record produced by `PlacesClient::retrieve`.
///
/// Every string field is present; components the upstream did not return
/// come back as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub address: String,
    pub location: LatLng,
    pub locality: String,
    pub administrative_area_level1: String,
    pub administrative_area_level2: String,
    pub country_code: String,
    pub country: String,
    pub postal_code: String,
    pub street_number: String,
    pub route: String,
}

/// Top-level details response. `result` stays raw so the status check runs
/// before any attempt to interpret it.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetailsResult {
    pub place_id: Option<String>,
    pub formatted_address: Option<String>,
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub address_components: Option<Vec<AddressComponent>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: Option<LatLng>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_type_tags_match_upstream() {
        let tags: Vec<&str> = PlaceType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            tags,
            [
                "street_number",
                "route",
                "locality",
                "administrative_area_level_1",
                "administrative_area_level_2",
                "country",
                "postal_code",
            ]
        );
    }

    #[test]
    fn place_type_serde_agrees_with_as_str() {
        for t in PlaceType::ALL {
            let json = serde_json::to_value(t).unwrap();
            assert_eq!(json, t.as_str());
        }
    }

    #[test]
    fn place_type_from_str() {
        assert_eq!("postal_code".parse::<PlaceType>().unwrap(), PlaceType::PostalCode);
        let err = "political".parse::<PlaceType>().unwrap_err();
        assert_eq!(err.to_string(), "unrecognized place type: political");
    }

    #[test]
    fn preferred_name_falls_back_to_short_name() {
        let component = AddressComponent {
            long_name: String::new(),
            short_name: "CA".to_string(),
            types: vec!["administrative_area_level_1".to_string()],
        };
        assert_eq!(component.preferred_name(), "CA");
        assert!(component.has_type(PlaceType::AdministrativeAreaLevel1));
        assert!(!component.has_type(PlaceType::Locality));
    }

    #[test]
    fn address_component_missing_fields_default_to_empty() {
        let component: AddressComponent = serde_json::from_str(r#"{"long_name":"Paris"}"#).unwrap();
        assert_eq!(component.short_name, "");
        assert!(component.types.is_empty());
    }

    #[test]
    fn place_serializes_in_camel_case() {
        let place = Place {
            id: "abc".to_string(),
            address: String::new(),
            location: LatLng { lat: 1.0, lng: 2.0 },
            locality: String::new(),
            administrative_area_level1: "CA".to_string(),
            administrative_area_level2: String::new(),
            country_code: "US".to_string(),
            country: String::new(),
            postal_code: String::new(),
            street_number: String::new(),
            route: String::new(),
        };
        let json = serde_json::to_value(&place).unwrap();
        assert_eq!(json["administrativeAreaLevel1"], "CA");
        assert_eq!(json["countryCode"], "US");
        assert_eq!(json["location"]["lng"], 2.0);
    }

    #[test]
    fn query_debug_redacts_key() {
        let query = PlaceQuery::new("abc123", "SUPER-SECRET-KEY").with_language("fr");
        let debug = format!("{query:?}");
        assert!(!debug.contains("SUPER-SECRET-KEY"), "{debug}");
        assert!(debug.contains("abc123"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn query_language_is_optional() {
        let query = PlaceQuery::new("abc", "secret");
        assert!(query.language.is_none());
        let query = query.with_language("fr");
        assert_eq!(query.language.as_deref(), Some("fr"));
    }
}
