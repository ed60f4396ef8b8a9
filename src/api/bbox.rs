use crate::error::MercatorError;
use geo_types::{Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

/// An axis-aligned box as `[min_x, min_y, max_x, max_y]`.
///
/// Used both for geographic boxes (west, south, east, north in degrees) and
/// for projected ones. The order is taken as given and never normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_x, y: self.min_y },
            coord! { x: self.max_x, y: self.max_y },
        )
    }

    /// Returns the box outline as a closed polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}

impl From<[f64; 4]> for BBox {
    fn from(v: [f64; 4]) -> Self {
        BBox::new(v[0], v[1], v[2], v[3])
    }
}

impl From<BBox> for [f64; 4] {
    fn from(b: BBox) -> Self {
        b.to_array()
    }
}

impl From<Rect<f64>> for BBox {
    fn from(rect: Rect<f64>) -> Self {
        BBox::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }
}

impl TryFrom<&[f64]> for BBox {
    type Error = MercatorError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match values {
            [min_x, min_y, max_x, max_y] => Ok(BBox::new(*min_x, *min_y, *max_x, *max_y)),
            _ => Err(MercatorError::InvalidArity {
                expected: 4,
                found: values.len(),
            }),
        }
    }
}
