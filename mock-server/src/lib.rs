use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;

/// Path of the details endpoint on the real API.
pub const DETAILS_PATH: &str = "/maps/api/place/details/json";

/// Place id that makes the server answer with HTTP 500.
pub const HTTP_500_PLACE_ID: &str = "HTTP_500";

const BUILTIN_FIXTURES: &[(&str, &str)] = &[
    ("abc123", include_str!("../fixtures/abc123.json")),
    (
        "ChIJN1t_tDeuEmsRUsoyG83frY4",
        include_str!("../fixtures/ChIJN1t_tDeuEmsRUsoyG83frY4.json"),
    ),
    ("no-result", include_str!("../fixtures/no-result.json")),
    ("no-geometry", include_str!("../fixtures/no-geometry.json")),
];

#[derive(Debug, Deserialize)]
pub struct DetailsParams {
    pub placeid: Option<String>,
    pub key: Option<String>,
    pub language: Option<String>,
}

/// Raw JSON bodies keyed by place id.
pub type Fixtures = Arc<HashMap<String, String>>;

pub fn builtin_fixtures() -> HashMap<String, String> {
    BUILTIN_FIXTURES
        .iter()
        .map(|(id, body)| (id.to_string(), body.to_string()))
        .collect()
}

pub fn app() -> Router {
    app_with_fixtures(builtin_fixtures())
}

pub fn app_with_fixtures(fixtures: HashMap<String, String>) -> Router {
    let fixtures: Fixtures = Arc::new(fixtures);
    Router::new()
        .route(DETAILS_PATH, get(place_details))
        .with_state(fixtures)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn place_details(
    State(fixtures): State<Fixtures>,
    Query(params): Query<DetailsParams>,
) -> Response {
    info!(placeid = ?params.placeid, language = ?params.language, "details lookup");

    if params.key.as_deref().unwrap_or_default().is_empty() {
        return Json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "You must use an API key to authenticate each request to Google Maps Platform APIs."
        }))
        .into_response();
    }

    let id = match params.placeid.as_deref() {
        None | Some("") => {
            return Json(json!({ "status": "INVALID_REQUEST" })).into_response();
        }
        Some(id) => id,
    };

    if id == HTTP_500_PLACE_ID {
        return (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response();
    }

    match fixtures.get(id) {
        Some(body) => ([(header::CONTENT_TYPE, "application/json")], body.clone()).into_response(),
        None => Json(json!({ "status": "NOT_FOUND" })).into_response(),
    }
}
