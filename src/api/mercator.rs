use crate::api::bbox::BBox;
use crate::api::tile_range::TileRange;
use crate::coord::Coordinate;
use crate::core::constants::{D2R, DEFAULT_TILE_SIZE, DEFAULT_TILE_SIZE_NZ, R2D, SIN_LIMIT};
use crate::core::projection;
use crate::core::resolution::{Resolution, ResolutionTable, shared_table};
use crate::error::MercatorError;
use geo::BoundingRect;
use geo_types::{Geometry, Point};
use log::trace;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::num::NonZeroU32;
use std::sync::Arc;

/// Which way tile rows are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressingStyle {
    /// Row 0 is the northernmost row (slippy map / Google style).
    #[default]
    Xyz,
    /// Row 0 is the southernmost row.
    Tms,
}

/// Engine configuration.
///
/// Missing fields fall back to a 256px tile and XYZ addressing.
///
/// ```
/// use spherical_mercator_rs::{AddressingStyle, MercatorOptions};
///
/// # fn main() -> Result<(), spherical_mercator_rs::MercatorError> {
/// let options = MercatorOptions::from_json(r#"{ "tile_size": 512, "style": "tms" }"#)?;
/// assert_eq!(options.tile_size, 512);
/// assert_eq!(options.style, AddressingStyle::Tms);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MercatorOptions {
    /// Width and height of one tile in pixels.
    pub tile_size: u32,
    /// Tile row addressing.
    pub style: AddressingStyle,
}

impl Default for MercatorOptions {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            style: AddressingStyle::Xyz,
        }
    }
}

impl MercatorOptions {
    /// Parses options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, MercatorError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Spherical Mercator (EPSG:3857) conversions for one tile size and addressing style.
///
/// Cloning is cheap; every engine with the same tile size shares one
/// [`ResolutionTable`].
///
/// # Example
///
/// ```
/// use spherical_mercator_rs::{BBox, SphericalMercator};
///
/// # fn main() -> Result<(), spherical_mercator_rs::MercatorError> {
/// let merc = SphericalMercator::new();
///
/// let px = merc.to_pixel(&(-179.0, 85.0), 9)?;
/// assert_eq!((px.x(), px.y()), (364.0, 215.0));
///
/// let range = merc.bbox_to_tile_range(BBox::new(13.0, 52.0, 14.0, 53.0), 10)?;
/// assert_eq!(range.to_array(), [548, 333, 551, 338]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SphericalMercator {
    tile_size: u32,
    style: AddressingStyle,
    table: Arc<ResolutionTable>,
}

impl Default for SphericalMercator {
    fn default() -> Self {
        Self::new()
    }
}

impl SphericalMercator {
    /// Creates an engine with 256px tiles and XYZ addressing.
    pub fn new() -> Self {
        Self::from_parts(DEFAULT_TILE_SIZE_NZ, AddressingStyle::Xyz)
    }

    pub fn builder() -> SphericalMercatorBuilder {
        SphericalMercatorBuilder::new()
    }

    pub fn with_options(options: &MercatorOptions) -> Result<Self, MercatorError> {
        let tile_size = NonZeroU32::new(options.tile_size)
            .ok_or(MercatorError::InvalidTileSize(options.tile_size))?;
        Ok(Self::from_parts(tile_size, options.style))
    }

    fn from_parts(tile_size: NonZeroU32, style: AddressingStyle) -> Self {
        trace!("new engine: tile_size={tile_size}, style={style:?}");
        Self {
            tile_size: tile_size.get(),
            style,
            table: shared_table(tile_size),
        }
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn style(&self) -> AddressingStyle {
        self.style
    }

    /// The shared scale table of this engine's tile size.
    pub fn resolution(&self) -> &Arc<ResolutionTable> {
        &self.table
    }

    /// Converts lon/lat (degrees) to a pixel position at `zoom`.
    ///
    /// Latitudes are clamped just short of the poles and the result is capped
    /// at the world width. There is no lower cap, so points west of -180°
    /// give negative pixels.
    pub fn to_pixel<C: Coordinate>(
        &self,
        ll: &C,
        zoom: u8,
    ) -> Result<Point<f64>, MercatorError> {
        let res = self.table.get(zoom)?;
        let (x, y) = lon_lat_to_pixel(&res, ll.x(), ll.y());
        Ok(Point::new(x, y))
    }

    /// Converts a pixel position at `zoom` back to lon/lat (degrees).
    pub fn to_lon_lat<C: Coordinate>(
        &self,
        px: &C,
        zoom: u8,
    ) -> Result<Point<f64>, MercatorError> {
        let res = self.table.get(zoom)?;
        let (lon, lat) = pixel_to_lon_lat(&res, px.x(), px.y());
        Ok(Point::new(lon, lat))
    }

    /// Returns the geographic bounds `[west, south, east, north]` of tile `x`/`y`.
    ///
    /// `y` is read according to the engine's addressing style.
    pub fn tile_bbox(&self, x: i64, y: i64, zoom: u8) -> Result<BBox, MercatorError> {
        let res = self.table.get(zoom)?;
        let row = self.row(y, zoom)?;
        Ok(self.tile_bbox_at(&res, x, row))
    }

    /// Converts a `y` index in this engine's addressing style to an XYZ row.
    fn row(&self, y: i64, zoom: u8) -> Result<i64, MercatorError> {
        match self.style {
            AddressingStyle::Xyz => Ok(y),
            AddressingStyle::Tms => flip_y(y, zoom),
        }
    }

    fn tile_bbox_at(&self, res: &Resolution, x: i64, row: i64) -> BBox {
        let size = f64::from(self.tile_size);
        let (x, y) = (x as f64, row as f64);

        // pixel y grows southward, so the lower left corner has the larger y
        let (west, south) = pixel_to_lon_lat(res, x * size, (y + 1.0) * size);
        let (east, north) = pixel_to_lon_lat(res, (x + 1.0) * size, y * size);

        BBox::new(west, south, east, north)
    }

    /// Returns the range of tiles covering a geographic `bbox` at `zoom`.
    ///
    /// Points on a tile edge belong to the tile east/south of it. The minima are
    /// floored at zero while the maxima are left uncapped; the result always has
    /// `min <= max` on both axes.
    pub fn bbox_to_tile_range(
        &self,
        bbox: impl Into<BBox>,
        zoom: u8,
    ) -> Result<TileRange, MercatorError> {
        let bbox = bbox.into();
        let res = self.table.get(zoom)?;

        let (ll_x, ll_y) = lon_lat_to_pixel(&res, bbox.min_x, bbox.min_y);
        let (ur_x, ur_y) = lon_lat_to_pixel(&res, bbox.max_x, bbox.max_y);

        let size = f64::from(self.tile_size);
        let x0 = (ll_x / size).floor() as i64;
        let x1 = ((ur_x - 1.0) / size).floor() as i64;
        let y0 = (ur_y / size).floor() as i64;
        let y1 = ((ll_y - 1.0) / size).floor() as i64;

        let min_x = x0.min(x1).max(0);
        let min_y = y0.min(y1).max(0);
        // near the poles both raw rows can sit above row 0
        let max_x = x0.max(x1).max(min_x);
        let max_y = y0.max(y1).max(min_y);

        let range = match self.style {
            AddressingStyle::Xyz => TileRange::new(min_x, min_y, max_x, max_y),
            AddressingStyle::Tms => {
                TileRange::new(min_x, flip_y(max_y, zoom)?, max_x, flip_y(min_y, zoom)?)
            }
        };
        Ok(range)
    }

    /// Returns the range of tiles covering the bounding box of `geometry`.
    ///
    /// Empty geometries have no bounding box and yield `None`.
    pub fn geometry_to_tile_range(
        &self,
        geometry: &Geometry<f64>,
        zoom: u8,
    ) -> Result<Option<TileRange>, MercatorError> {
        self.table.get(zoom)?;
        geometry
            .bounding_rect()
            .map(|rect| self.bbox_to_tile_range(rect, zoom))
            .transpose()
    }

    /// Computes the geographic bounds of every tile in `range`, row by row.
    pub fn tile_bboxes(&self, range: &TileRange, zoom: u8) -> Result<Vec<BBox>, MercatorError> {
        let res = self.table.get(zoom)?;
        let (min_x, max_x) = (range.min_x, range.max_x);

        (range.min_y..=range.max_y)
            .into_par_iter()
            .flat_map_iter(|y| (min_x..=max_x).map(move |x| (x, y)))
            .map(|(x, y)| -> Result<BBox, MercatorError> {
                Ok(self.tile_bbox_at(&res, x, self.row(y, zoom)?))
            })
            .collect()
    }

    /// Projects lon/lat (degrees) to Mercator meters. See [`projection::forward`].
    pub fn forward<C: Coordinate>(&self, ll: &C) -> Point<f64> {
        projection::forward(ll)
    }

    /// Unprojects Mercator meters to lon/lat (degrees). See [`projection::inverse`].
    pub fn inverse<C: Coordinate>(&self, xy: &C) -> Point<f64> {
        projection::inverse(xy)
    }
}

fn lon_lat_to_pixel(res: &Resolution, lon: f64, lat: f64) -> (f64, f64) {
    let d = res.half_extent;
    let f = (D2R * lat).sin().clamp(-SIN_LIMIT, SIN_LIMIT);
    let x = (d + lon * res.pixels_per_degree).round();
    let y = (d + 0.5 * ((1.0 + f) / (1.0 - f)).ln() * (-res.pixels_per_radian)).round();
    (x.min(res.extent), y.min(res.extent))
}

fn pixel_to_lon_lat(res: &Resolution, x: f64, y: f64) -> (f64, f64) {
    let g = (y - res.half_extent) / (-res.pixels_per_radian);
    let lon = (x - res.half_extent) / res.pixels_per_degree;
    let lat = R2D * (2.0 * g.exp().atan() - FRAC_PI_2);
    (lon, lat)
}

fn flip_y(y: i64, zoom: u8) -> Result<i64, MercatorError> {
    ((1i64 << zoom) - 1)
        .checked_sub(y)
        .ok_or(MercatorError::InvalidTileIndex(y))
}

/// Builder for [`SphericalMercator`].
///
/// ```
/// use spherical_mercator_rs::{AddressingStyle, SphericalMercator};
///
/// # fn main() -> Result<(), spherical_mercator_rs::MercatorError> {
/// let merc = SphericalMercator::builder().tile_size(512).tms().build()?;
/// assert_eq!(merc.tile_size(), 512);
/// assert_eq!(merc.style(), AddressingStyle::Tms);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SphericalMercatorBuilder {
    options: MercatorOptions,
}

impl SphericalMercatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tile_size(mut self, tile_size: u32) -> Self {
        self.options.tile_size = tile_size;
        self
    }

    pub fn style(mut self, style: AddressingStyle) -> Self {
        self.options.style = style;
        self
    }

    /// Shorthand for `style(AddressingStyle::Tms)`.
    pub fn tms(self) -> Self {
        self.style(AddressingStyle::Tms)
    }

    pub fn build(self) -> Result<SphericalMercator, MercatorError> {
        SphericalMercator::with_options(&self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{MAX_EXTENT, MAX_LATITUDE};
    use geo_types::{LineString, line_string, point};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    const WORLD: [f64; 4] = [-180.0, -85.05112877980659, 180.0, MAX_LATITUDE];

    fn tms() -> SphericalMercator {
        SphericalMercator::builder().tms().build().unwrap()
    }

    #[test]
    fn test_to_pixel() -> Result<(), MercatorError> {
        let merc = SphericalMercator::new();
        let px = merc.to_pixel(&(-179.0, 85.0), 9)?;
        assert_eq!((px.x(), px.y()), (364.0, 215.0));
        Ok(())
    }

    #[test]
    fn test_to_lon_lat() -> Result<(), MercatorError> {
        let merc = SphericalMercator::new();
        let ll = merc.to_lon_lat(&(200.0, 200.0), 9)?;
        assert_eq!((ll.x(), ll.y()), (-179.45068359375, 85.00351401304403));
        Ok(())
    }

    #[test]
    fn test_to_pixel_clamps() -> Result<(), MercatorError> {
        let merc = SphericalMercator::new();

        let south = merc.to_pixel(&(0.0, -90.0), 0)?;
        assert_eq!(south.y(), 256.0);

        let east = merc.to_pixel(&(200.0, 0.0), 0)?;
        assert_eq!(east.x(), 256.0);

        // no lower clamp
        let north = merc.to_pixel(&(-200.0, 90.0), 0)?;
        assert!(north.x() < 0.0);
        assert!(north.y() < 0.0);
        Ok(())
    }

    #[rstest]
    #[case::world(0, 0, 0, [-180.0, -85.05112877980659, 180.0, 85.0511287798066])]
    #[case::south_west(0, 0, 1, [-180.0, -85.05112877980659, 0.0, 0.0])]
    fn test_tile_bbox_tms(
        #[case] x: i64,
        #[case] y: i64,
        #[case] zoom: u8,
        #[case] expected: [f64; 4],
    ) -> Result<(), MercatorError> {
        assert_eq!(tms().tile_bbox(x, y, zoom)?.to_array(), expected);
        Ok(())
    }

    #[rstest]
    #[case::world(0, 0, 0, [-180.0, -85.05112877980659, 180.0, 85.0511287798066])]
    #[case::south_east(1, 1, 1, [0.0, -85.05112877980659, 180.0, 0.0])]
    fn test_tile_bbox_xyz(
        #[case] x: i64,
        #[case] y: i64,
        #[case] zoom: u8,
        #[case] expected: [f64; 4],
    ) -> Result<(), MercatorError> {
        let merc = SphericalMercator::new();
        assert_eq!(merc.tile_bbox(x, y, zoom)?.to_array(), expected);
        Ok(())
    }

    #[rstest]
    #[case::world(WORLD, 0, [0, 0, 0, 0])]
    #[case::south_west([-180.0, -85.05112877980659, 0.0, 0.0], 1, [0, 0, 0, 0])]
    #[case::small_box([-0.087891, 40.95703, 0.087891, 41.044916], 3, [3, 4, 4, 5])]
    #[case::beyond_pole([-10.0, 89.0, 10.0, 90.0], 0, [0, 0, 0, 0])]
    fn test_bbox_to_tile_range_tms(
        #[case] bbox: [f64; 4],
        #[case] zoom: u8,
        #[case] expected: [i64; 4],
    ) -> Result<(), MercatorError> {
        assert_eq!(tms().bbox_to_tile_range(bbox, zoom)?.to_array(), expected);
        Ok(())
    }

    #[rstest]
    #[case::world(WORLD, 0, [0, 0, 0, 0])]
    #[case::world_zoom_1(WORLD, 1, [0, 0, 1, 1])]
    #[case::berlin([13.0, 52.0, 14.0, 53.0], 10, [548, 333, 551, 338])]
    #[case::degenerate_point([-112.5, 85.0511, -112.5, 85.0511], 0, [0, 0, 0, 0])]
    #[case::beyond_pole([-10.0, 89.0, 10.0, 90.0], 0, [0, 0, 0, 0])]
    #[case::full_latitudes([-180.0, -90.0, 180.0, 90.0], 2, [0, 0, 3, 3])]
    fn test_bbox_to_tile_range_xyz(
        #[case] bbox: [f64; 4],
        #[case] zoom: u8,
        #[case] expected: [i64; 4],
    ) -> Result<(), MercatorError> {
        let merc = SphericalMercator::new();
        assert_eq!(merc.bbox_to_tile_range(bbox, zoom)?.to_array(), expected);
        Ok(())
    }

    #[test]
    fn test_tile_bbox_maps_back_to_tile() -> Result<(), MercatorError> {
        for merc in [SphericalMercator::new(), tms()] {
            for (x, y) in [(17, 11), (0, 0), (31, 31), (5, 20)] {
                let bbox = merc.tile_bbox(x, y, 5)?;
                let range = merc.bbox_to_tile_range(bbox, 5)?;
                assert_eq!(range, TileRange::new(x, y, x, y));
            }
        }
        Ok(())
    }

    #[test]
    fn test_tile_range_ordered_random_boxes() -> Result<(), MercatorError> {
        let mut rng = StdRng::seed_from_u64(0x3857);

        for merc in [SphericalMercator::new(), tms()] {
            for _ in 0..1000 {
                let (x1, x2) = (rng.gen_range(-180.0..180.0), rng.gen_range(-180.0..180.0));
                let (y1, y2) = (rng.gen_range(-85.0..85.0), rng.gen_range(-85.0..85.0));
                let zoom = rng.gen_range(0..22);
                let bbox = BBox::new(
                    f64::min(x1, x2),
                    f64::min(y1, y2),
                    f64::max(x1, x2),
                    f64::max(y1, y2),
                );

                let range = merc.bbox_to_tile_range(bbox, zoom)?;
                assert!(range.min_x <= range.max_x, "{bbox:?} at {zoom}: {range:?}");
                assert!(range.min_y <= range.max_y, "{bbox:?} at {zoom}: {range:?}");
            }
        }
        Ok(())
    }

    #[test]
    fn test_tile_range_ordered_polar_boxes() -> Result<(), MercatorError> {
        let mut rng = StdRng::seed_from_u64(90);
        let mut boxes = vec![
            BBox::new(-180.0, 85.06, 180.0, 90.0),
            BBox::new(-180.0, -90.0, 180.0, -85.06),
            BBox::new(-10.0, 89.0, 10.0, 90.0),
            BBox::new(-10.0, -90.0, 10.0, -89.0),
        ];
        for _ in 0..1000 {
            let lon = rng.gen_range(-180.0..180.0);
            let lat = rng.gen_range(-90.0..90.0);
            boxes.push(BBox::new(lon, lat, lon, lat));

            let (x1, x2) = (rng.gen_range(-180.0..180.0), rng.gen_range(-180.0..180.0));
            let (y1, y2) = (rng.gen_range(-90.0..90.0), rng.gen_range(-90.0..90.0));
            boxes.push(BBox::new(
                f64::min(x1, x2),
                f64::min(y1, y2),
                f64::max(x1, x2),
                f64::max(y1, y2),
            ));
        }

        for merc in [SphericalMercator::new(), tms()] {
            for (i, bbox) in boxes.iter().enumerate() {
                let zoom = (i % 22) as u8;
                let range = merc.bbox_to_tile_range(*bbox, zoom)?;
                assert!(range.min_x <= range.max_x, "{bbox:?} at {zoom}: {range:?}");
                assert!(range.min_y <= range.max_y, "{bbox:?} at {zoom}: {range:?}");
            }
        }
        Ok(())
    }

    #[test]
    fn test_tms_rows_beyond_grid() -> Result<(), MercatorError> {
        let merc = tms();
        assert_eq!(
            merc.tile_bbox(0, i64::MIN, 3),
            Err(MercatorError::InvalidTileIndex(i64::MIN))
        );

        let range = TileRange::new(0, i64::MIN, 0, i64::MIN);
        assert_eq!(
            merc.tile_bboxes(&range, 3),
            Err(MercatorError::InvalidTileIndex(i64::MIN))
        );

        // rows outside the grid that still flip are accepted, as in XYZ
        assert!(merc.tile_bbox(0, -1, 3).is_ok());
        assert!(merc.tile_bbox(0, 8, 3).is_ok());
        assert!(SphericalMercator::new().tile_bbox(0, i64::MIN, 3).is_ok());
        Ok(())
    }

    #[test]
    fn test_pixel_roundtrip() -> Result<(), MercatorError> {
        let merc = SphericalMercator::new();
        for &(lon, lat) in &[
            (-2.2479699500757597, 53.48082746395233),
            (13.404954, 52.520008),
            (151.2093, -33.8688),
            (-70.0, -60.0),
            (0.0, 0.0),
        ] {
            for zoom in [12, 16, 20] {
                let px = merc.to_pixel(&(lon, lat), zoom)?;
                let back = merc.to_lon_lat(&px, zoom)?;
                assert!((back.x() - lon).abs() < 1e-3);
                assert!((back.y() - lat).abs() < 1e-3);
            }
        }
        Ok(())
    }

    #[rstest]
    #[case::south_west((-180.0, -MAX_LATITUDE), (-MAX_EXTENT, -MAX_EXTENT))]
    #[case::north_east((180.0, MAX_LATITUDE), (MAX_EXTENT, MAX_EXTENT))]
    fn test_forward_and_inverse(#[case] ll: (f64, f64), #[case] merc_xy: (f64, f64)) {
        let merc = SphericalMercator::new();

        let projected = merc.forward(&ll);
        assert_eq!((projected.x(), projected.y()), merc_xy);

        let unprojected = merc.inverse(&merc_xy);
        assert_eq!((unprojected.x(), unprojected.y()), ll);
    }

    #[test]
    fn test_engines_share_table() -> Result<(), MercatorError> {
        let a = SphericalMercator::new();
        let b = SphericalMercator::builder().tms().build()?;
        let c = SphericalMercator::builder().tile_size(512).build()?;

        assert!(Arc::ptr_eq(a.resolution(), b.resolution()));
        assert!(!Arc::ptr_eq(a.resolution(), c.resolution()));
        assert!(Arc::ptr_eq(a.resolution(), a.clone().resolution()));
        Ok(())
    }

    #[test]
    fn test_tile_size_512() -> Result<(), MercatorError> {
        let merc = SphericalMercator::builder().tile_size(512).build()?;
        let px = merc.to_pixel(&(0.0, 0.0), 1)?;
        assert_eq!((px.x(), px.y()), (512.0, 512.0));
        assert_eq!(merc.tile_bbox(0, 0, 0)?.to_array(), WORLD);
        assert_eq!(merc.bbox_to_tile_range(WORLD, 1)?, TileRange::new(0, 0, 1, 1));
        Ok(())
    }

    #[test]
    fn test_invalid_input() {
        let merc = SphericalMercator::new();
        assert_eq!(
            merc.to_pixel(&(0.0, 0.0), 30),
            Err(MercatorError::InvalidZoomLevel(30))
        );
        assert_eq!(
            merc.to_lon_lat(&(0.0, 0.0), 255),
            Err(MercatorError::InvalidZoomLevel(255))
        );
        assert!(merc.tile_bbox(0, 0, 31).is_err());
        assert!(merc.bbox_to_tile_range(WORLD, 40).is_err());

        let result = SphericalMercator::builder().tile_size(0).build();
        assert!(matches!(result, Err(MercatorError::InvalidTileSize(0))));
    }

    #[test]
    fn test_options() -> Result<(), MercatorError> {
        let options = MercatorOptions::from_json("{}")?;
        assert_eq!(options, MercatorOptions::default());

        let options = MercatorOptions::from_json(r#"{"tile_size": 512, "style": "tms"}"#)?;
        let merc = SphericalMercator::with_options(&options)?;
        assert_eq!(merc.tile_size(), 512);
        assert_eq!(merc.style(), AddressingStyle::Tms);

        let bad = MercatorOptions::from_json(r#"{"style": "quadkey"}"#);
        assert!(matches!(bad, Err(MercatorError::ConfigError(_))));
        Ok(())
    }

    #[test]
    fn test_geometry_to_tile_range() -> Result<(), MercatorError> {
        let merc = SphericalMercator::new();

        let line: LineString<f64> = line_string![(x: 13.0, y: 52.0), (x: 14.0, y: 53.0)];
        let range = merc.geometry_to_tile_range(&Geometry::LineString(line), 10)?;
        assert_eq!(range, Some(TileRange::new(548, 333, 551, 338)));

        let pt = Geometry::Point(point! { x: 10.0, y: 10.0 });
        assert_eq!(
            merc.geometry_to_tile_range(&pt, 1)?,
            Some(TileRange::new(1, 0, 1, 0))
        );

        let empty = Geometry::LineString(LineString::<f64>::new(vec![]));
        assert_eq!(merc.geometry_to_tile_range(&empty, 1)?, None);
        Ok(())
    }

    #[test]
    fn test_tile_bboxes() -> Result<(), MercatorError> {
        let merc = SphericalMercator::new();
        let range = TileRange::new(0, 0, 1, 1);
        let bboxes = merc.tile_bboxes(&range, 1)?;

        assert_eq!(bboxes.len(), 4);
        for ((x, y), bbox) in range.iter().zip(&bboxes) {
            assert_eq!(*bbox, merc.tile_bbox(x, y, 1)?);
        }
        assert_eq!(bboxes[3].to_array(), [0.0, -85.05112877980659, 180.0, 0.0]);
        Ok(())
    }
}
