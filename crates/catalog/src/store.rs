use crate::marker::Marker;
use crate::query::{MarkerQuery, query_markers};

/// Errors raised while loading marker data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Payload was not a valid marker array. This includes markers tagged
    /// with a category outside the closed set: data-integrity faults are
    /// reported at ingestion, never at query time.
    Corrupt(String),
    Io(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Corrupt(msg) => write!(f, "marker data corrupt: {msg}"),
            StoreError::Io(msg) => write!(f, "marker data unreadable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read-only marker source.
///
/// The single query capability is the seam for substituting a real storage
/// engine without touching filter logic.
pub trait MarkerStore {
    fn query(&self, query: &MarkerQuery) -> Result<Vec<Marker>, StoreError>;
}

/// Markers held in memory, populated once and never mutated. Safe for any
/// number of concurrent readers.
#[derive(Debug, Default)]
pub struct InMemoryMarkerStore {
    markers: Vec<Marker>,
}

impl InMemoryMarkerStore {
    pub fn new(markers: Vec<Marker>) -> Self {
        InMemoryMarkerStore { markers }
    }

    /// Parse a JSON array of markers.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let markers: Vec<Marker> =
            serde_json::from_str(json).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        Ok(InMemoryMarkerStore::new(markers))
    }

    /// The built-in demo fixture.
    pub fn builtin() -> Self {
        static FIXTURE: &str = include_str!("../fixture/markers.json");
        InMemoryMarkerStore::from_json_str(FIXTURE).expect("built-in marker fixture must parse")
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

impl MarkerStore for InMemoryMarkerStore {
    fn query(&self, query: &MarkerQuery) -> Result<Vec<Marker>, StoreError> {
        Ok(query_markers(&self.markers, query))
    }
}
