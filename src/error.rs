use crate::core::constants::ZOOM_LEVELS;

/// Error type for spherical-mercator-rs operations.
#[derive(Debug, PartialEq)]
pub enum MercatorError {
    /// The zoom level is outside the valid range (0-29).
    InvalidZoomLevel(u8),
    /// The tile size must be a positive number of pixels.
    InvalidTileSize(u32),
    /// A tile index cannot be converted between XYZ and TMS rows.
    InvalidTileIndex(i64),
    /// A slice had the wrong number of values for the requested shape.
    InvalidArity { expected: usize, found: usize },
    /// Options could not be parsed.
    ConfigError(String),
}

impl std::fmt::Display for MercatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MercatorError::InvalidZoomLevel(z) => {
                write!(f, "Invalid zoom level: {} (must be < {})", z, ZOOM_LEVELS)
            }
            MercatorError::InvalidTileSize(s) => write!(f, "Invalid tile size: {}", s),
            MercatorError::InvalidTileIndex(i) => write!(f, "Invalid tile index: {}", i),
            MercatorError::InvalidArity { expected, found } => {
                write!(f, "Invalid arity: expected {} values, found {}", expected, found)
            }
            MercatorError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for MercatorError {}

impl From<serde_json::Error> for MercatorError {
    fn from(e: serde_json::Error) -> Self {
        MercatorError::ConfigError(e.to_string())
    }
}
