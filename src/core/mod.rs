pub mod constants;
pub mod projection;
pub mod resolution;

pub use constants::{
    DEFAULT_TILE_SIZE, EARTH_RADIUS, MAX_EXTENT, MAX_LATITUDE, MAX_ZOOM_LEVEL, ZOOM_LEVELS,
};
pub use projection::{forward, inverse};
pub use resolution::{Resolution, ResolutionTable, resolution_table};
