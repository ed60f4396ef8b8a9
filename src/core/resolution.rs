use crate::core::constants::ZOOM_LEVELS;
use crate::error::MercatorError;
use log::{debug, trace};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::f64::consts::TAU;
use std::num::NonZeroU32;
use std::sync::{Arc, LazyLock};

static TABLES: LazyLock<Mutex<HashMap<NonZeroU32, Arc<ResolutionTable>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Scale factors of a single zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Pixels per degree of longitude.
    pub pixels_per_degree: f64,
    /// Pixels per radian.
    pub pixels_per_radian: f64,
    /// Half the world width in pixels, the pixel position of lon/lat 0/0.
    pub half_extent: f64,
    /// Full world width in pixels.
    pub extent: f64,
}

/// Per-zoom scale factors for one tile size.
///
/// Tables are built once per tile size and shared between every
/// [`SphericalMercator`](crate::SphericalMercator) using that size.
#[derive(Debug, PartialEq)]
pub struct ResolutionTable {
    tile_size: u32,
    bc: [f64; ZOOM_LEVELS],
    cc: [f64; ZOOM_LEVELS],
    zc: [f64; ZOOM_LEVELS],
    ac: [f64; ZOOM_LEVELS],
}

impl ResolutionTable {
    fn build(tile_size: NonZeroU32) -> Self {
        let tile_size = tile_size.get();
        let mut bc = [0.0; ZOOM_LEVELS];
        let mut cc = [0.0; ZOOM_LEVELS];
        let mut zc = [0.0; ZOOM_LEVELS];
        let mut ac = [0.0; ZOOM_LEVELS];

        for z in 0..ZOOM_LEVELS {
            let size = f64::from(tile_size) * 2f64.powi(z as i32);
            bc[z] = size / 360.0;
            cc[z] = size / TAU;
            zc[z] = size / 2.0;
            ac[z] = size;
        }

        Self {
            tile_size,
            bc,
            cc,
            zc,
            ac,
        }
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Returns the scale factors of `zoom`.
    pub fn get(&self, zoom: u8) -> Result<Resolution, MercatorError> {
        let z = zoom as usize;
        if z >= ZOOM_LEVELS {
            return Err(MercatorError::InvalidZoomLevel(zoom));
        }

        Ok(Resolution {
            pixels_per_degree: self.bc[z],
            pixels_per_radian: self.cc[z],
            half_extent: self.zc[z],
            extent: self.ac[z],
        })
    }
}

/// Returns the shared resolution table for `tile_size`, building it on first use.
///
/// Fails only for a zero tile size.
pub fn resolution_table(tile_size: u32) -> Result<Arc<ResolutionTable>, MercatorError> {
    let tile_size = NonZeroU32::new(tile_size).ok_or(MercatorError::InvalidTileSize(tile_size))?;
    Ok(shared_table(tile_size))
}

/// The lookup, build and insert happen under a single lock, so concurrent
/// callers asking for the same size always receive the same `Arc`.
pub(crate) fn shared_table(tile_size: NonZeroU32) -> Arc<ResolutionTable> {
    let mut tables = TABLES.lock();
    if let Some(table) = tables.get(&tile_size) {
        trace!("resolution table hit: tile_size={tile_size}");
        return Arc::clone(table);
    }

    debug!("building resolution table: tile_size={tile_size}");
    let table = Arc::new(ResolutionTable::build(tile_size));
    tables.insert(tile_size, Arc::clone(&table));
    table
}
