use crate::coord::Coordinate;
use crate::core::constants::{D2R, EARTH_RADIUS, MAX_EXTENT, R2D};
use geo_types::Point;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Projects a WGS84 lon/lat (degrees) to Spherical Mercator meters.
///
/// Both axes are clamped to `±MAX_EXTENT`, so latitudes beyond
/// `±MAX_LATITUDE` land on the edge of the square world.
pub fn forward<C: Coordinate>(ll: &C) -> Point<f64> {
    let x = EARTH_RADIUS * ll.x() * D2R;
    let y = EARTH_RADIUS * (FRAC_PI_4 + 0.5 * ll.y() * D2R).tan().ln();

    Point::new(
        x.clamp(-MAX_EXTENT, MAX_EXTENT),
        y.clamp(-MAX_EXTENT, MAX_EXTENT),
    )
}

/// Unprojects Spherical Mercator meters to WGS84 lon/lat (degrees).
///
/// No clamping is applied.
pub fn inverse<C: Coordinate>(xy: &C) -> Point<f64> {
    let lon = xy.x() * R2D / EARTH_RADIUS;
    let lat = (FRAC_PI_2 - 2.0 * (-xy.y() / EARTH_RADIUS).exp().atan()) * R2D;
    Point::new(lon, lat)
}
