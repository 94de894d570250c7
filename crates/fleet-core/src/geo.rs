//! Geographic coordinate type and the spatial math the integrator runs on.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Idle resources receive
//! metre-scale GPS jitter, which sits uncomfortably close to the f32 ULP at
//! high latitudes (~0.4 m at 62° N), and a fleet is tens of vehicles rather
//! than hundreds of thousands of agents — so double precision costs nothing
//! and keeps repeated interpolation drift-free.

/// Mean Earth radius in kilometres, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Symmetric, and zero (within floating tolerance) iff the points are
    /// equal.  Accurate to well under city scale; geodesic refinements are
    /// not warranted for route legs of a few kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Initial compass bearing from `self` to `other`, in degrees `[0, 360)`.
    ///
    /// For coincident points `atan2(0, 0)` yields `0.0` — a stable value, not
    /// an error.
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        let deg = y.atan2(x).to_degrees().rem_euclid(360.0);
        // rem_euclid of a tiny negative angle can round up to exactly 360.0
        if deg >= 360.0 { 0.0 } else { deg }
    }

    /// Linear interpolation in lat/lon space (not geodesic — fine at city
    /// scale).  Exactly `self` at `fraction = 0` and exactly `other` at
    /// `fraction = 1`: the weighted form `a·(1−t) + b·t` guarantees both
    /// endpoints bit-for-bit.
    #[inline]
    pub fn lerp(self, other: GeoPoint, fraction: f64) -> GeoPoint {
        let t = fraction;
        GeoPoint {
            lat: self.lat * (1.0 - t) + other.lat * t,
            lon: self.lon * (1.0 - t) + other.lon * t,
        }
    }

    /// `true` if `self` lies within `radius_km` of `center`.
    #[inline]
    pub fn within_radius_km(self, center: GeoPoint, radius_km: f64) -> bool {
        self.distance_km(center) <= radius_km
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
