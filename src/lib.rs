//! toar: top-of-atmosphere radiometric conversions for Landsat imagery
//!
//! Converts single-band scenes from digital numbers to TOA radiance, and on to
//! TOA reflectance or brightness temperature. Every conversion reads band 1 of
//! a source raster, applies a per-pixel formula, keeps nodata pixels untouched
//! and writes a new Float32 GeoTIFF with the source georeferencing.
//!
//! ```no_run
//! use toar::core::{radiance, reflectance, EarthSunFormula, PhysicalReflectance};
//!
//! # fn main() -> toar::ToaResult<()> {
//! radiance::gainbias("LC08_B4.TIF", 0.012, -60.1, "LC08_B4_rad.TIF")?;
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2021, 7, 14)
//!     .unwrap()
//!     .and_hms_opt(10, 32, 0)
//!     .unwrap();
//! let params = PhysicalReflectance::for_date(&date, EarthSunFormula::Meeus, 58.2, 1536.0);
//! reflectance::physical(
//!     "LC08_B4_rad.TIF",
//!     params.earth_sun_dist,
//!     params.sun_elev,
//!     params.esun,
//!     "LC08_B4_ref.TIF",
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod types;
pub mod io;
pub mod core;

// Re-export main types and functions for easier access
pub use crate::types::{Band, GeoTransform, ToaError, ToaImage, ToaResult};
pub use crate::io::{RasterReader, RasterWriter};
pub use crate::core::{earth_sun_distance, Conversion, EarthSunFormula, PixelConversion};

#[cfg(feature = "python")]
mod python {
    use crate::core::{brightness, radiance, reflectance, transform, Conversion};
    use crate::types::ToaError;
    use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
    use pyo3::exceptions::{PyFileExistsError, PyOSError, PyRuntimeError, PyValueError};
    use pyo3::prelude::*;
    use pyo3::types::{PyDateAccess, PyDateTime, PyTimeAccess};
    use std::collections::HashMap;
    use std::path::PathBuf;

    impl From<ToaError> for PyErr {
        fn from(err: ToaError) -> PyErr {
            match err {
                ToaError::AlreadyExists(_) => PyFileExistsError::new_err(err.to_string()),
                ToaError::InvalidArgument(_) => PyValueError::new_err(err.to_string()),
                ToaError::SourceUnreadable { .. } => PyOSError::new_err(err.to_string()),
                _ => PyRuntimeError::new_err(err.to_string()),
            }
        }
    }

    /// Earth-Sun distance in AU. `date` must be a `datetime.datetime`.
    #[pyfunction]
    #[pyo3(signature = (date, formula = "Meeus"))]
    fn earth_sun_dist(date: &PyDateTime, formula: &str) -> PyResult<f64> {
        let datetime = chrono::NaiveDate::from_ymd_opt(
            date.get_year(),
            date.get_month() as u32,
            date.get_day() as u32,
        )
        .and_then(|day| {
            day.and_hms_opt(
                date.get_hour() as u32,
                date.get_minute() as u32,
                date.get_second() as u32,
            )
        })
        .ok_or_else(|| ToaError::InvalidArgument("Invalid calendar date".to_string()))?;

        Ok(crate::core::earth_sun_distance_named(&datetime, formula)?)
    }

    #[pyfunction]
    fn radiance_gainbias(input_scene: PathBuf, gain: f64, bias: f64, output_scene: PathBuf) -> PyResult<()> {
        Ok(radiance::gainbias(input_scene, gain, bias, output_scene)?)
    }

    #[pyfunction]
    fn radiance_scaling(
        input_scene: PathBuf,
        lmin: f64,
        lmax: f64,
        qcalmin: f64,
        qcalmax: f64,
        output_scene: PathBuf,
    ) -> PyResult<()> {
        Ok(radiance::scaling(input_scene, lmin, lmax, qcalmin, qcalmax, output_scene)?)
    }

    #[pyfunction]
    fn reflectance_gainbias(
        input_scene: PathBuf,
        gain: f64,
        bias: f64,
        sun_elev: f64,
        output_scene: PathBuf,
    ) -> PyResult<()> {
        Ok(reflectance::gainbias(input_scene, gain, bias, sun_elev, output_scene)?)
    }

    #[pyfunction]
    fn reflectance_physical(
        input_scene: PathBuf,
        earth_sun_dist: f64,
        sun_elev: f64,
        esun: f64,
        output_scene: PathBuf,
    ) -> PyResult<()> {
        Ok(reflectance::physical(input_scene, earth_sun_dist, sun_elev, esun, output_scene)?)
    }

    #[pyfunction]
    fn toa_radiance(input_scene: PathBuf, gain: f64, bias: f64, output_scene: PathBuf) -> PyResult<()> {
        Ok(radiance::gainbias(input_scene, gain, bias, output_scene)?)
    }

    /// Gain/bias reflectance without sun-elevation correction
    #[pyfunction]
    fn toa_reflectance(input_scene: PathBuf, gain: f64, bias: f64, output_scene: PathBuf) -> PyResult<()> {
        Ok(reflectance::rescale(input_scene, gain, bias, output_scene)?)
    }

    #[pyfunction]
    fn toa_brightness(input_scene: PathBuf, k1: f64, k2: f64, output_scene: PathBuf) -> PyResult<()> {
        Ok(brightness::from_radiance(input_scene, k1, k2, output_scene)?)
    }

    #[pyfunction]
    fn toa_rad_to_toa_bright(input_scene: PathBuf, k1: f64, k2: f64, output_scene: PathBuf) -> PyResult<()> {
        Ok(brightness::from_radiance(input_scene, k1, k2, output_scene)?)
    }

    #[pyfunction]
    fn dn_to_toa_bright(
        input_scene: PathBuf,
        gain: f64,
        bias: f64,
        k1: f64,
        k2: f64,
        output_scene: PathBuf,
    ) -> PyResult<()> {
        Ok(brightness::from_digital_number(input_scene, gain, bias, k1, k2, output_scene)?)
    }

    /// Run a conversion selected by method name, e.g. `"radiance_scaling"`
    #[pyfunction]
    fn convert(
        input_scene: PathBuf,
        method: &str,
        params: HashMap<String, f64>,
        output_scene: PathBuf,
    ) -> PyResult<()> {
        Ok(Conversion::from_params(method, &params)?.apply(input_scene, output_scene)?)
    }

    /// In-memory variant of `convert` for numpy arrays
    #[pyfunction]
    #[pyo3(signature = (data, method, params, nodata = None))]
    fn convert_array<'py>(
        py: Python<'py>,
        data: PyReadonlyArray2<f64>,
        method: &str,
        params: HashMap<String, f64>,
        nodata: Option<f64>,
    ) -> PyResult<&'py PyArray2<f64>> {
        let conversion = Conversion::from_params(method, &params)?;
        let source = data.as_array().to_owned();
        let target = transform::apply_formula(&source, nodata, |v| {
            crate::core::PixelConversion::convert(&conversion, v)
        });
        Ok(target.into_pyarray(py))
    }

    /// Python module definition
    #[pymodule]
    fn _core(_py: Python, m: &PyModule) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(earth_sun_dist, m)?)?;
        m.add_function(wrap_pyfunction!(radiance_gainbias, m)?)?;
        m.add_function(wrap_pyfunction!(radiance_scaling, m)?)?;
        m.add_function(wrap_pyfunction!(reflectance_gainbias, m)?)?;
        m.add_function(wrap_pyfunction!(reflectance_physical, m)?)?;
        m.add_function(wrap_pyfunction!(toa_radiance, m)?)?;
        m.add_function(wrap_pyfunction!(toa_reflectance, m)?)?;
        m.add_function(wrap_pyfunction!(toa_brightness, m)?)?;
        m.add_function(wrap_pyfunction!(toa_rad_to_toa_bright, m)?)?;
        m.add_function(wrap_pyfunction!(dn_to_toa_bright, m)?)?;
        m.add_function(wrap_pyfunction!(convert, m)?)?;
        m.add_function(wrap_pyfunction!(convert_array, m)?)?;
        Ok(())
    }
}
