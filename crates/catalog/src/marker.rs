use serde::{Deserialize, Serialize};

use crate::category::CategoryId;

/// A community listing pinned to a location.
///
/// `created_at` is a display-only timestamp string; the data model imposes
/// no ordering on it. Coordinates are assumed well-formed by the producer
/// (lat in [-90, 90], lng in [-180, 180]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: CategoryId,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::Marker;
    use crate::category::CategoryId;
    use pretty_assertions::assert_eq;

    #[test]
    fn wire_form_is_camel_case_with_optional_fields() {
        let json = r#"{
            "id": "pin-001",
            "title": "Werkzeugverleih",
            "description": "Bohrmaschine und Leiter zu verleihen",
            "category": "sharing",
            "lat": 52.532,
            "lng": 13.383,
            "address": "Invalidenstraße 43, 10115 Berlin",
            "countryCode": "DE",
            "createdAt": "2025-06-14T09:30:00Z"
        }"#;

        let marker: Marker = serde_json::from_str(json).unwrap();
        assert_eq!(marker.category, CategoryId::Sharing);
        assert_eq!(marker.country_code.as_deref(), Some("DE"));

        let value = serde_json::to_value(&marker).unwrap();
        assert_eq!(value["countryCode"], "DE");
        assert_eq!(value["createdAt"], "2025-06-14T09:30:00Z");
    }

    #[test]
    fn address_and_country_are_optional() {
        let json = r#"{
            "id": "pin-002",
            "title": "Rooftop picnic",
            "description": "Bring a blanket",
            "category": "events",
            "lat": 48.856,
            "lng": 2.352,
            "createdAt": "2025-07-01T18:00:00Z"
        }"#;

        let marker: Marker = serde_json::from_str(json).unwrap();
        assert_eq!(marker.address, None);
        assert_eq!(marker.country_code, None);

        // Absent optionals stay off the wire entirely.
        let value = serde_json::to_value(&marker).unwrap();
        assert!(value.get("address").is_none());
        assert!(value.get("countryCode").is_none());
    }
}
