use std::num::NonZeroU32;

/// Number of zoom levels with a precomputed resolution entry (0-29).
pub const ZOOM_LEVELS: usize = 30;

/// Highest zoom level accepted by the engine.
pub const MAX_ZOOM_LEVEL: u8 = (ZOOM_LEVELS - 1) as u8;

/// Tile width/height in pixels used when none is configured.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Sphere radius of the Web Mercator projection in meters (WGS84 semi-major axis).
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Half the width of the projected world in meters, `π * EARTH_RADIUS`.
pub const MAX_EXTENT: f64 = 20037508.342789244;

/// Latitude in degrees at which the projected world becomes square.
pub const MAX_LATITUDE: f64 = 85.0511287798066;

/// Degrees to radians, correctly rounded.
pub(crate) const D2R: f64 = 0.017453292519943295;

/// Radians to degrees, correctly rounded.
pub(crate) const R2D: f64 = 57.29577951308232;

/// Sine clamp applied before the log-odds in pixel conversion.
pub(crate) const SIN_LIMIT: f64 = 0.9999;

pub(crate) const DEFAULT_TILE_SIZE_NZ: NonZeroU32 = NonZeroU32::new(DEFAULT_TILE_SIZE).unwrap();
