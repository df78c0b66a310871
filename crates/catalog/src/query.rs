use foundation::Bounds;

use crate::category::CategoryId;
use crate::marker::Marker;

/// Filter predicates for a marker query. Every field is optional; the
/// default matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerQuery {
    /// Inclusive bounding box; `None` means no geographic constraint.
    pub bounds: Option<Bounds>,
    /// Allowed categories; an empty set means no constraint, not "match
    /// nothing".
    pub categories: Vec<CategoryId>,
    /// Case-insensitive substring over title, description and address.
    pub search: Option<String>,
}

fn bounds_allows(bounds: Option<Bounds>, marker: &Marker) -> bool {
    let Some(bounds) = bounds else {
        return true;
    };
    bounds.contains(marker.lat, marker.lng)
}

fn category_allows(categories: &[CategoryId], marker: &Marker) -> bool {
    if categories.is_empty() {
        return true;
    }
    categories.contains(&marker.category)
}

fn search_allows(search: Option<&str>, marker: &Marker) -> bool {
    let Some(needle) = search else {
        return true;
    };
    let needle = needle.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    marker.title.to_lowercase().contains(&needle)
        || marker.description.to_lowercase().contains(&needle)
        || marker
            .address
            .as_deref()
            .is_some_and(|a| a.to_lowercase().contains(&needle))
}

/// Apply the active predicates, ANDed together.
///
/// Pure and stable: input order is preserved, predicates commute, and
/// re-filtering a result with the same query returns it unchanged. Numeric
/// coercion of raw parameters happens at the HTTP boundary, never here.
pub fn query_markers(markers: &[Marker], query: &MarkerQuery) -> Vec<Marker> {
    markers
        .iter()
        .filter(|marker| {
            bounds_allows(query.bounds, marker)
                && category_allows(&query.categories, marker)
                && search_allows(query.search.as_deref(), marker)
        })
        .cloned()
        .collect()
}
