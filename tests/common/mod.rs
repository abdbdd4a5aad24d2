#![allow(dead_code)]

use gdal::raster::Buffer;
use gdal::DriverManager;
use ndarray::Array2;
use std::path::{Path, PathBuf};
use toar::RasterReader;

/// Roughly 30 m pixels on a geographic grid
pub const SCENE_TRANSFORM: [f64; 6] = [12.5, 0.00027, 0.0, 41.9, 0.0, -0.00027];

pub const WGS84_WKT: &str = r#"GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563,AUTHORITY["EPSG","7030"]],AUTHORITY["EPSG","6326"]],PRIMEM["Greenwich",0,AUTHORITY["EPSG","8901"]],UNIT["degree",0.0174532925199433,AUTHORITY["EPSG","9122"]],AXIS["Latitude",NORTH],AXIS["Longitude",EAST],AUTHORITY["EPSG","4326"]]"#;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Write `data` as a georeferenced single-band Float32 GeoTIFF
pub fn write_scene(dir: &Path, name: &str, data: &Array2<f64>, no_data: Option<f64>) -> PathBuf {
    let path = dir.join(name);
    let (height, width) = data.dim();

    let driver = DriverManager::get_driver_by_name("GTiff").expect("GTiff driver");
    let mut dataset = driver
        .create_with_band_type::<f32, _>(&path, width as isize, height as isize, 1)
        .expect("Failed to create test scene");
    dataset.set_geo_transform(&SCENE_TRANSFORM).expect("Failed to set geotransform");
    dataset.set_projection(WGS84_WKT).expect("Failed to set projection");

    let mut band = dataset.rasterband(1).expect("Missing band 1");
    if no_data.is_some() {
        band.set_no_data_value(no_data).expect("Failed to set nodata");
    }
    let buffer = Buffer::new((width, height), data.iter().map(|&v| v as f32).collect());
    band.write((0, 0), (width, height), &buffer).expect("Failed to write test scene");

    path
}

pub fn read_scene(path: &Path) -> toar::Band {
    RasterReader::read_band(path).expect("Failed to read output scene")
}
