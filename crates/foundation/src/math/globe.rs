/// Cartesian position on the rendered globe, in the same unit as the radius
/// passed to [`lat_lng_to_globe`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlobePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl GlobePoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn as_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Place a lat/lng pair on a sphere of the given radius centered at the
/// origin.
///
/// Orientation: north pole at +y, azimuth offset so the equator/prime
/// meridian point lands at (-radius, 0, 0). Renderers depend on this exact
/// convention. Out-of-range coordinates are not rejected; they produce
/// well-defined positions that simply mean nothing geographically.
pub fn lat_lng_to_globe(lat: f64, lng: f64, radius: f64) -> GlobePoint {
    let phi = (90.0 - lat).to_radians();
    let theta = (lng + 180.0).to_radians();

    let x = -(radius * phi.sin() * theta.cos());
    let y = radius * phi.cos();
    let z = radius * phi.sin() * theta.sin();

    GlobePoint::new(x, y, z)
}
