use crate::error::MercatorError;
use geo_types::{Coord, Point};

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples, `[f64; 2]` arrays, `geo_types::Point<f64>`
/// and `geo_types::Coord<f64>`, so every conversion accepts any of them.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude, pixel x or easting in meters).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude, pixel y or northing in meters).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }
    fn y(&self) -> f64 {
        self[1]
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

/// Reads a coordinate from a slice that must hold exactly two values.
pub fn coordinate_from_slice(values: &[f64]) -> Result<(f64, f64), MercatorError> {
    match values {
        [x, y] => Ok((*x, *y)),
        _ => Err(MercatorError::InvalidArity {
            expected: 2,
            found: values.len(),
        }),
    }
}
