//! Raster I/O for single-band GeoTIFF-style datasets

pub mod raster;

pub use raster::{RasterReader, RasterWriter};
