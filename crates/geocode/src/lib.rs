//! Free-text place lookup, standing in for a real geocoding provider.
//!
//! The table below simulates the provider; the contract any real
//! integration must satisfy is the one `lookup` honors: string in,
//! best-effort single coordinate result or definitive absence out. A
//! provider failure must surface to callers as absence, never as a panic.

pub mod validation;

pub use validation::*;

use serde::Serialize;

/// A resolved place: coordinates plus a human-readable label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResult {
    pub lat: f64,
    pub lng: f64,
    pub display_name: String,
}

/// Known postal codes and place names. German entries first, then a few
/// international cities. Keys are stored pre-normalized (lowercase).
const PLACES: &[(&str, f64, f64, &str)] = &[
    ("10115", 52.532, 13.383, "Berlin, Germany"),
    ("10117", 52.516, 13.388, "Berlin Mitte, Germany"),
    ("80331", 48.137, 11.575, "München, Germany"),
    ("20095", 53.551, 9.993, "Hamburg, Germany"),
    ("50667", 50.938, 6.959, "Köln, Germany"),
    ("60311", 50.11, 8.682, "Frankfurt, Germany"),
    ("berlin", 52.52, 13.405, "Berlin, Germany"),
    ("münchen", 48.137, 11.576, "München, Germany"),
    ("munich", 48.137, 11.576, "Munich, Germany"),
    ("hamburg", 53.551, 9.993, "Hamburg, Germany"),
    ("köln", 50.938, 6.959, "Köln, Germany"),
    ("cologne", 50.938, 6.959, "Cologne, Germany"),
    ("frankfurt", 50.11, 8.682, "Frankfurt, Germany"),
    ("london", 51.507, -0.127, "London, UK"),
    ("paris", 48.856, 2.352, "Paris, France"),
    ("new york", 40.713, -74.006, "New York, USA"),
    ("tokyo", 35.689, 139.692, "Tokyo, Japan"),
];

/// Exact-match lookup after trimming and lowercasing the query.
///
/// `None` is a definitive "no such place", not an error.
pub fn lookup(query: &str) -> Option<GeocodeResult> {
    let normalized = query.trim().to_lowercase();
    PLACES
        .iter()
        .find(|(key, _, _, _)| *key == normalized)
        .map(|&(_, lat, lng, display_name)| GeocodeResult {
            lat,
            lng,
            display_name: display_name.to_string(),
        })
}
