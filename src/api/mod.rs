pub mod bbox;
pub mod mercator;
pub mod tile_range;

pub use bbox::BBox;
pub use mercator::{
    AddressingStyle, MercatorOptions, SphericalMercator, SphericalMercatorBuilder,
};
pub use tile_range::TileRange;
