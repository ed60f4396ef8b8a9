//! # spherical-mercator-rs
//!
//! Spherical Mercator (EPSG:3857) conversions between lon/lat, projected
//! meters, pixels and XYZ/TMS tile indices.
//!
//! ### 1. `SphericalMercator` - Pixel and Tile Operations
//!
//! ```
//! use spherical_mercator_rs::SphericalMercator;
//!
//! # fn main() -> Result<(), spherical_mercator_rs::MercatorError> {
//! let merc = SphericalMercator::new();
//!
//! let px = merc.to_pixel(&(-179.0, 85.0), 9)?;
//! let ll = merc.to_lon_lat(&px, 9)?;
//!
//! let range = merc.bbox_to_tile_range([13.0, 52.0, 14.0, 53.0], 10)?;
//! for (x, y) in range.iter() {
//!     let bbox = merc.tile_bbox(x, y, 10)?;
//!     println!("10/{x}/{y}: {:?}", bbox.to_array());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Configuration - Tile Size and TMS Addressing
//!
//! ```
//! use spherical_mercator_rs::{MercatorOptions, SphericalMercator};
//!
//! # fn main() -> Result<(), spherical_mercator_rs::MercatorError> {
//! let merc = SphericalMercator::builder().tile_size(512).tms().build()?;
//!
//! let options = MercatorOptions::from_json(r#"{ "style": "tms" }"#)?;
//! let merc = SphericalMercator::with_options(&options)?;
//! assert_eq!(merc.tile_bbox(0, 0, 1)?.to_array(), [-180.0, -85.05112877980659, 0.0, 0.0]);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `forward` / `inverse` - Raw Projection
//!
//! ```
//! use spherical_mercator_rs::{forward, inverse};
//!
//! let meters = forward(&(-180.0, -85.0511287798066));
//! assert_eq!((meters.x(), meters.y()), (-20037508.342789244, -20037508.342789244));
//!
//! let ll = inverse(&meters);
//! assert_eq!((ll.x(), ll.y()), (-180.0, -85.0511287798066));
//! ```
//!

pub mod api;
pub mod coord;
pub mod core;
pub mod error;

pub use api::{
    AddressingStyle, BBox, MercatorOptions, SphericalMercator, SphericalMercatorBuilder, TileRange,
};
pub use coord::{Coordinate, coordinate_from_slice};
pub use crate::core::{
    DEFAULT_TILE_SIZE, EARTH_RADIUS, MAX_EXTENT, MAX_LATITUDE, MAX_ZOOM_LEVEL, Resolution,
    ResolutionTable, ZOOM_LEVELS, forward, inverse, resolution_table,
};
pub use error::MercatorError;

pub use geo_types;
