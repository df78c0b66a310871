/// Axis-aligned latitude/longitude box in degrees.
///
/// `south <= north` and `west <= east` are expected but not enforced. Boxes
/// crossing the antimeridian (west > east) are not supported.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Bounds {
            north,
            south,
            east,
            west,
        }
    }

    /// Symmetric box around a center point, sized by map zoom level.
    ///
    /// Uses the 360 / 2^zoom degrees-per-zoom heuristic in both axes. This
    /// ignores longitude compression toward the poles; it only drives an
    /// indicative viewport, never a precise query.
    pub fn from_center(lat: f64, lng: f64, zoom: f64) -> Self {
        let degrees_per_zoom = 360.0 / 2f64.powf(zoom);
        let half = degrees_per_zoom / 2.0;
        Bounds {
            north: lat + half,
            south: lat - half,
            east: lng + half,
            west: lng - half,
        }
    }

    /// Parse the `north`/`south`/`east`/`west` query parameters.
    ///
    /// All four must be present and parse as finite numbers; partial or
    /// malformed sets yield `None` so callers fall back to "no bounds
    /// filter" instead of failing the request.
    pub fn from_params(
        north: Option<&str>,
        south: Option<&str>,
        east: Option<&str>,
        west: Option<&str>,
    ) -> Option<Self> {
        Some(Bounds::new(
            parse_finite(north?)?,
            parse_finite(south?)?,
            parse_finite(east?)?,
            parse_finite(west?)?,
        ))
    }

    /// Inclusive containment test on all four edges.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat <= self.north && lat >= self.south && lng <= self.east && lng >= self.west
    }
}

pub(crate) fn parse_finite(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}
