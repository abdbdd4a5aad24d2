//! Top-of-atmosphere reflectance for reflective bands

use crate::core::earth_sun::{earth_sun_distance, EarthSunFormula};
use crate::core::transform::{self, PixelConversion};
use crate::types::ToaResult;
use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::path::Path;

/// Reflectance rescaling without sun-elevation correction: `gain * dn + bias`.
///
/// Intended for products that publish reflectance rescaling coefficients
/// directly (e.g. Landsat 8 `REFLECTANCE_MULT_BAND_n` / `REFLECTANCE_ADD_BAND_n`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReflectanceRescale {
    pub gain: f64,
    pub bias: f64,
}

impl PixelConversion for ReflectanceRescale {
    fn name(&self) -> &'static str {
        "reflectance rescale"
    }

    fn convert(&self, value: f64) -> f64 {
        self.gain * value + self.bias
    }
}

/// Gain/bias reflectance corrected for the local sun elevation (degrees).
///
/// A sun elevation of zero divides by zero; no guard is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReflectanceGainBias {
    pub gain: f64,
    pub bias: f64,
    pub sun_elev: f64,
}

impl PixelConversion for ReflectanceGainBias {
    fn name(&self) -> &'static str {
        "reflectance gain/bias"
    }

    fn convert(&self, value: f64) -> f64 {
        (self.gain * value + self.bias) / self.sun_elev.to_radians().sin()
    }
}

/// Radiance to reflectance from Earth-Sun distance, solar irradiance and sun
/// elevation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalReflectance {
    /// Earth-Sun distance in astronomical units
    pub earth_sun_dist: f64,
    /// Local sun elevation angle in degrees
    pub sun_elev: f64,
    /// Mean solar exoatmospheric irradiance for the band
    pub esun: f64,
}

impl PhysicalReflectance {
    pub fn new(earth_sun_dist: f64, sun_elev: f64, esun: f64) -> Self {
        Self {
            earth_sun_dist,
            sun_elev,
            esun,
        }
    }

    /// Parameters for an acquisition date, computing the Earth-Sun distance
    /// with `formula`.
    pub fn for_date<D: Datelike + Timelike>(
        date: &D,
        formula: EarthSunFormula,
        sun_elev: f64,
        esun: f64,
    ) -> Self {
        Self::new(earth_sun_distance(date, formula), sun_elev, esun)
    }

    pub fn solar_zenith(&self) -> f64 {
        90.0 - self.sun_elev
    }
}

impl PixelConversion for PhysicalReflectance {
    fn name(&self) -> &'static str {
        "physical reflectance"
    }

    fn convert(&self, value: f64) -> f64 {
        let reflectance = (PI * value * self.earth_sun_dist.powi(2)) / self.esun
            * self.solar_zenith().to_radians().cos();

        // Elevation correction is skipped entirely at zero elevation, unlike
        // ReflectanceGainBias. Possibly unintended upstream; kept as is.
        if self.sun_elev != 0.0 {
            reflectance / self.sun_elev.to_radians().sin()
        } else {
            reflectance
        }
    }
}

/// Convert a DN scene to reflectance with gain/bias and sun-elevation correction.
pub fn gainbias<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    gain: f64,
    bias: f64,
    sun_elev: f64,
    output: Q,
) -> ToaResult<()> {
    let conversion = ReflectanceGainBias {
        gain,
        bias,
        sun_elev,
    };
    transform::apply(input, &conversion, output)
}

/// Convert a radiance scene to reflectance with the physical model.
pub fn physical<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    earth_sun_dist: f64,
    sun_elev: f64,
    esun: f64,
    output: Q,
) -> ToaResult<()> {
    let conversion = PhysicalReflectance::new(earth_sun_dist, sun_elev, esun);
    transform::apply(input, &conversion, output)
}

/// Convert a DN scene to reflectance with rescaling coefficients only.
pub fn rescale<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    gain: f64,
    bias: f64,
    output: Q,
) -> ToaResult<()> {
    transform::apply(input, &ReflectanceRescale { gain, bias }, output)
}
