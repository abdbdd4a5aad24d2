use crate::types::{Band, GeoTransform, ToaError, ToaResult};
use gdal::raster::{Buffer, GdalDataType};
use gdal::{Dataset, DriverManager};
use ndarray::Array2;
use std::path::Path;

/// Nodata marker as the band actually stores it.
///
/// Float32 samples can only hold the f32-rounded marker, so comparing them
/// against the f64 value from the metadata would never match.
pub fn storage_no_data(band_type: GdalDataType, no_data: Option<f64>) -> Option<f64> {
    match band_type {
        GdalDataType::Float32 => no_data.map(|v| v as f32 as f64),
        _ => no_data,
    }
}

/// Reads the first band of a raster dataset
pub struct RasterReader;

impl RasterReader {
    /// Read band 1 with its nodata marker, geotransform and projection.
    ///
    /// Any failure to open the dataset or locate the band is reported as
    /// `SourceUnreadable`.
    pub fn read_band<P: AsRef<Path>>(path: P) -> ToaResult<Band> {
        let path = path.as_ref();
        log::debug!("Reading source band from: {}", path.display());

        let unreadable = |source| ToaError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        };

        let dataset = Dataset::open(path).map_err(unreadable)?;
        let (width, height) = dataset.raster_size();
        let rasterband = dataset.rasterband(1).map_err(unreadable)?;

        let no_data = storage_no_data(rasterband.band_type(), rasterband.no_data_value());
        let band_data = rasterband
            .read_as::<f64>((0, 0), (width, height), (width, height), None)
            .map_err(unreadable)?;

        let data = Array2::from_shape_vec((height, width), band_data.data)
            .map_err(|e| ToaError::InvalidFormat(format!("Failed to reshape band data: {}", e)))?;

        // GDAL reports a missing geotransform as an error
        let geo_transform = dataset.geo_transform().ok().map(GeoTransform::from_gdal);
        let projection = dataset.projection();

        log::debug!("Source size: {}x{}, nodata: {:?}", width, height, no_data);
        log::debug!("Source geotransform: {:?}", geo_transform);

        Ok(Band {
            data,
            no_data,
            geo_transform,
            projection,
        })
    }
}

/// Writes single-band Float32 GeoTIFFs
pub struct RasterWriter;

impl RasterWriter {
    /// Fail with `AlreadyExists` when `path` is present on disk
    pub fn ensure_absent<P: AsRef<Path>>(path: P) -> ToaResult<()> {
        let path = path.as_ref();
        if path.exists() {
            return Err(ToaError::AlreadyExists(path.to_path_buf()));
        }
        Ok(())
    }

    /// Create `path` as a new GeoTIFF and write `band` into it.
    ///
    /// The dataset is closed (and flushed) before returning. If writing fails
    /// after creation, GDAL may leave a partial file behind.
    pub fn write_band<P: AsRef<Path>>(path: P, band: &Band) -> ToaResult<()> {
        let path = path.as_ref();
        Self::ensure_absent(path)?;

        let (height, width) = band.dim();
        log::debug!("Creating {}x{} Float32 GeoTIFF: {}", width, height, path.display());

        let driver = DriverManager::get_driver_by_name("GTiff")?;
        let mut dataset = driver.create_with_band_type::<f32, _>(
            path,
            width as isize,
            height as isize,
            1,
        )?;

        if let Some(transform) = &band.geo_transform {
            dataset.set_geo_transform(&transform.to_gdal())?;
        }
        if !band.projection.is_empty() {
            dataset.set_projection(&band.projection)?;
        }

        {
            let mut rasterband = dataset.rasterband(1)?;
            if band.no_data.is_some() {
                rasterband.set_no_data_value(band.no_data)?;
            }

            let flat_data: Vec<f32> = band.data.iter().map(|&v| v as f32).collect();
            let buffer = Buffer::new((width, height), flat_data);
            rasterband.write((0, 0), (width, height), &buffer)?;
        }

        // Closing the dataset flushes it to disk
        drop(dataset);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_write_then_read_band() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("band.tif");

        let mut band = Band::new(array![[1.5, 2.5, 3.5], [4.5, -9999.0, 6.5]], Some(-9999.0));
        band.geo_transform = Some(GeoTransform::from_gdal([500000.0, 30.0, 0.0, 4200000.0, 0.0, -30.0]));

        RasterWriter::write_band(&path, &band).unwrap();
        let read = RasterReader::read_band(&path).unwrap();

        assert_eq!(read.dim(), (2, 3));
        assert_eq!(read.no_data, Some(-9999.0));
        assert_eq!(read.geo_transform, band.geo_transform);
        assert_eq!(read.data, band.data);
    }

    #[test]
    fn test_write_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taken.tif");
        std::fs::write(&path, b"keep me").unwrap();

        let band = Band::new(array![[1.0]], None);
        let result = RasterWriter::write_band(&path, &band);

        assert!(matches!(result, Err(ToaError::AlreadyExists(_))));
        assert_eq!(std::fs::read(&path).unwrap(), b"keep me");
    }

    #[test]
    fn test_storage_no_data_rounds_float32_only() {
        let marker = Some(-3.4e38);
        assert_eq!(
            storage_no_data(GdalDataType::Float32, marker),
            Some(-3.4e38_f32 as f64)
        );
        assert_ne!(storage_no_data(GdalDataType::Float32, marker), marker);
        assert_eq!(storage_no_data(GdalDataType::Float64, marker), marker);
        assert_eq!(storage_no_data(GdalDataType::UInt16, Some(0.0)), Some(0.0));
        assert_eq!(storage_no_data(GdalDataType::Float32, None), None);
    }

    #[test]
    fn test_float32_nodata_matches_stored_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("float_nodata.tif");

        let band = Band::new(array![[0.1, 2.0]], Some(0.1));
        RasterWriter::write_band(&path, &band).unwrap();
        let read = RasterReader::read_band(&path).unwrap();

        assert_eq!(read.no_data, Some(0.1_f32 as f64));
        assert_eq!(read.data[[0, 0]], read.no_data.unwrap());
    }

    #[test]
    fn test_read_missing_source() {
        let result = RasterReader::read_band("/nonexistent/scene_B4.TIF");
        assert!(matches!(result, Err(ToaError::SourceUnreadable { .. })));
    }
}
