//! The marker retrieval endpoint.
//!
//! Filter activation is deliberately lenient: partial or malformed bounds
//! parameters deactivate the bounds filter instead of failing the request,
//! and the endpoint never returns an error status for bad filter input.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::Query;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use catalog::{CategoryId, Marker, MarkerQuery};
use foundation::{Bounds, FlyTo};

use crate::{api_error, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct PinsParams {
    // Bounds arrive as raw strings: a malformed number must deactivate the
    // filter, not fail extraction with a 400.
    pub north: Option<String>,
    pub south: Option<String>,
    pub east: Option<String>,
    pub west: Option<String>,
    #[serde(default)]
    pub category: Vec<String>,
    pub search: Option<String>,
    // Viewport fallback: when no complete bounds are supplied, a parseable
    // center derives them (zoom defaults to 14).
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub zoom: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PinsResponse {
    pub items: Vec<Marker>,
}

pub async fn get_pins(
    State(state): State<AppState>,
    Query(params): Query<PinsParams>,
) -> Result<Json<PinsResponse>, (StatusCode, Json<Value>)> {
    let (query, unmatched_categories) = build_query(&params);

    if unmatched_categories {
        return Ok(Json(PinsResponse { items: Vec::new() }));
    }

    let items = state.store.query(&query).map_err(|e| {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Marker query failed: {e}"),
        )
    })?;
    Ok(Json(PinsResponse { items }))
}

/// Translate raw query parameters into a `MarkerQuery`.
///
/// The boolean flags the "categories supplied but none of them known" case,
/// which must yield an empty result set rather than an unconstrained one.
fn build_query(params: &PinsParams) -> (MarkerQuery, bool) {
    let bounds = Bounds::from_params(
        params.north.as_deref(),
        params.south.as_deref(),
        params.east.as_deref(),
        params.west.as_deref(),
    )
    .or_else(|| {
        let fly = FlyTo::from_params(
            params.lat.as_deref(),
            params.lng.as_deref(),
            params.zoom.as_deref(),
        )?;
        Some(Bounds::from_center(fly.lat, fly.lng, fly.zoom as f64))
    });

    let categories: Vec<CategoryId> = params
        .category
        .iter()
        .filter_map(|raw| CategoryId::parse(raw))
        .collect();
    let unmatched = !params.category.is_empty() && categories.is_empty();

    let query = MarkerQuery {
        bounds,
        categories,
        search: params.search.clone(),
    };
    (query, unmatched)
}
