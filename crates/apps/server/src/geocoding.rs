//! The search endpoint: validate the query, then resolve it against the
//! geocoding table.
//!
//! A missing match is a definitive outcome (`result: null`), distinct from a
//! validation failure (400) and from any transport failure on the caller's
//! side.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use geocode::GeocodeResult;

use crate::api_error;

#[derive(Debug, Deserialize)]
pub struct GeocodeParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct GeocodeResponse {
    pub result: Option<GeocodeResult>,
}

pub async fn get_geocode(
    Query(params): Query<GeocodeParams>,
) -> Result<Json<GeocodeResponse>, (StatusCode, Json<Value>)> {
    if let Err(err) = geocode::validate_search_query(&params.q) {
        return Err(api_error(StatusCode::BAD_REQUEST, err.to_string()));
    }

    Ok(Json(GeocodeResponse {
        result: geocode::lookup(&params.q),
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_util::{app, get_json};

    #[tokio::test]
    async fn resolves_known_place() {
        let (status, body) = get_json(app(), "/api/geocode?q=Berlin").await;
        assert_eq!(status, 200);
        assert_eq!(body["result"]["displayName"], "Berlin, Germany");
        assert_eq!(body["result"]["lat"], 52.52);
    }

    #[tokio::test]
    async fn normalizes_whitespace_and_case() {
        let (status, body) = get_json(app(), "/api/geocode?q=%20BERLIN%20").await;
        assert_eq!(status, 200);
        assert_eq!(body["result"]["displayName"], "Berlin, Germany");
    }

    #[tokio::test]
    async fn no_match_is_null_not_an_error() {
        let (status, body) = get_json(app(), "/api/geocode?q=Nowhereville").await;
        assert_eq!(status, 200);
        assert!(body["result"].is_null());
    }

    #[tokio::test]
    async fn too_short_query_is_rejected_before_lookup() {
        let (status, body) = get_json(app(), "/api/geocode?q=a").await;
        assert_eq!(status, 400);
        assert_eq!(body["error"], "Search query must be at least 2 characters");
    }

    #[tokio::test]
    async fn disallowed_characters_are_rejected() {
        let (status, body) = get_json(app(), "/api/geocode?q=berlin%21").await;
        assert_eq!(status, 400);
        assert_eq!(body["error"], "Invalid characters in search query");
    }

    #[tokio::test]
    async fn missing_query_counts_as_too_short() {
        let (status, body) = get_json(app(), "/api/geocode").await;
        assert_eq!(status, 400);
        assert_eq!(body["error"], "Search query must be at least 2 characters");
    }
}
