use crate::core::constants::ZOOM_LEVELS;
use crate::error::MercatorError;
use serde::{Deserialize, Serialize};

/// Inclusive range of tile indices `[min_x, min_y, max_x, max_y]` at one zoom level.
///
/// Produced by [`SphericalMercator::bbox_to_tile_range`](crate::SphericalMercator::bbox_to_tile_range).
/// The minima are never negative for XYZ addressing, but the maxima are not
/// capped at `2^zoom - 1`; use [`TileRange::clamp_to_zoom`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i64; 4]", into = "[i64; 4]")]
pub struct TileRange {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl TileRange {
    pub fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn to_array(&self) -> [i64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }

    /// Number of tile columns, saturating at `i64::MAX`.
    pub fn width(&self) -> u64 {
        span(self.min_x, self.max_x)
    }

    /// Number of tile rows, saturating at `i64::MAX`.
    pub fn height(&self) -> u64 {
        span(self.min_y, self.max_y)
    }

    pub fn len(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Caps the range to the tiles that exist at `zoom`.
    pub fn clamp_to_zoom(&self, zoom: u8) -> Result<Self, MercatorError> {
        if zoom as usize >= ZOOM_LEVELS {
            return Err(MercatorError::InvalidZoomLevel(zoom));
        }

        let last = (1i64 << zoom) - 1;
        Ok(Self {
            min_x: self.min_x.clamp(0, last),
            min_y: self.min_y.clamp(0, last),
            max_x: self.max_x.clamp(0, last),
            max_y: self.max_y.clamp(0, last),
        })
    }

    /// Iterates `(x, y)` row by row.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + use<> {
        let (min_x, max_x) = (self.min_x, self.max_x);
        (self.min_y..=self.max_y).flat_map(move |y| (min_x..=max_x).map(move |x| (x, y)))
    }
}

fn span(min: i64, max: i64) -> u64 {
    max.saturating_sub(min).saturating_add(1).max(0) as u64
}

impl From<[i64; 4]> for TileRange {
    fn from(v: [i64; 4]) -> Self {
        TileRange::new(v[0], v[1], v[2], v[3])
    }
}

impl From<TileRange> for [i64; 4] {
    fn from(r: TileRange) -> Self {
        r.to_array()
    }
}
