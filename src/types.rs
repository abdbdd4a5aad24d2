use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Single-band image samples (rows x cols)
pub type ToaImage = Array2<f64>;

/// Geospatial transformation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoTransform {
    pub top_left_x: f64,
    pub pixel_width: f64,
    pub rotation_x: f64,
    pub top_left_y: f64,
    pub rotation_y: f64,
    pub pixel_height: f64,
}

impl GeoTransform {
    /// Build from GDAL's six-coefficient affine ordering
    pub fn from_gdal(coefficients: [f64; 6]) -> Self {
        Self {
            top_left_x: coefficients[0],
            pixel_width: coefficients[1],
            rotation_x: coefficients[2],
            top_left_y: coefficients[3],
            rotation_y: coefficients[4],
            pixel_height: coefficients[5],
        }
    }

    pub fn to_gdal(&self) -> [f64; 6] {
        [
            self.top_left_x,
            self.pixel_width,
            self.rotation_x,
            self.top_left_y,
            self.rotation_y,
            self.pixel_height,
        ]
    }
}

/// One raster band: samples, nodata marker and georeferencing.
///
/// Georeferencing is opaque to the conversions and is carried from source to
/// destination unchanged.
#[derive(Debug, Clone)]
pub struct Band {
    pub data: ToaImage,
    pub no_data: Option<f64>,
    pub geo_transform: Option<GeoTransform>,
    /// Coordinate system as WKT; empty when the source has none
    pub projection: String,
}

impl Band {
    /// Band without georeferencing, mostly useful for in-memory processing
    pub fn new(data: ToaImage, no_data: Option<f64>) -> Self {
        Self {
            data,
            no_data,
            geo_transform: None,
            projection: String::new(),
        }
    }

    /// (rows, cols)
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Same georeferencing and nodata marker, new samples
    pub fn with_data(&self, data: ToaImage) -> Self {
        Self {
            data,
            no_data: self.no_data,
            geo_transform: self.geo_transform,
            projection: self.projection.clone(),
        }
    }
}

/// Error types for radiometric conversions
#[derive(Debug, thiserror::Error)]
pub enum ToaError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{} already exists!", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Cannot read source raster {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        source: gdal::errors::GdalError,
    },

    #[error("GDAL error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

/// Result type for radiometric conversions
pub type ToaResult<T> = Result<T, ToaError>;
