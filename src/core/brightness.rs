//! At-sensor brightness temperature (Kelvin) for emissive bands

use crate::core::radiance::RadianceGainBias;
use crate::core::transform::{self, PixelConversion};
use crate::types::ToaResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Thermal band calibration constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalConstants {
    /// Calibration constant 1, W/(m^2 sr um)
    pub k1: f64,
    /// Calibration constant 2, Kelvin
    pub k2: f64,
}

impl ThermalConstants {
    /// Landsat 5 TM band 6
    pub const LANDSAT5_TM_B6: ThermalConstants = ThermalConstants { k1: 607.76, k2: 1260.56 };
    /// Landsat 7 ETM+ band 6
    pub const LANDSAT7_ETM_B6: ThermalConstants = ThermalConstants { k1: 666.09, k2: 1282.71 };
    /// Landsat 8 TIRS band 10
    pub const LANDSAT8_TIRS_B10: ThermalConstants = ThermalConstants { k1: 774.8853, k2: 1321.0789 };
    /// Landsat 8 TIRS band 11
    pub const LANDSAT8_TIRS_B11: ThermalConstants = ThermalConstants { k1: 480.8883, k2: 1201.1442 };

    /// Inverse Planck: radiance to brightness temperature
    pub fn brightness(&self, radiance: f64) -> f64 {
        self.k2 / ((self.k1 / radiance) + 1.0).ln()
    }
}

/// Radiance to brightness temperature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadianceBrightness {
    pub constants: ThermalConstants,
}

impl RadianceBrightness {
    pub fn new(k1: f64, k2: f64) -> Self {
        Self {
            constants: ThermalConstants { k1, k2 },
        }
    }
}

impl PixelConversion for RadianceBrightness {
    fn name(&self) -> &'static str {
        "brightness from radiance"
    }

    fn convert(&self, value: f64) -> f64 {
        self.constants.brightness(value)
    }
}

/// Digital numbers to brightness temperature through gain/bias radiance.
///
/// Nodata is matched against the DN band, not the intermediate radiance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DnBrightness {
    pub radiance: RadianceGainBias,
    pub constants: ThermalConstants,
}

impl DnBrightness {
    pub fn new(gain: f64, bias: f64, k1: f64, k2: f64) -> Self {
        Self {
            radiance: RadianceGainBias::new(gain, bias),
            constants: ThermalConstants { k1, k2 },
        }
    }
}

impl PixelConversion for DnBrightness {
    fn name(&self) -> &'static str {
        "brightness from digital numbers"
    }

    fn convert(&self, value: f64) -> f64 {
        self.constants.brightness(self.radiance.convert(value))
    }
}

/// Convert a radiance scene to brightness temperature.
pub fn from_radiance<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    k1: f64,
    k2: f64,
    output: Q,
) -> ToaResult<()> {
    transform::apply(input, &RadianceBrightness::new(k1, k2), output)
}

/// Convert a DN scene to brightness temperature.
pub fn from_digital_number<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    gain: f64,
    bias: f64,
    k1: f64,
    k2: f64,
    output: Q,
) -> ToaResult<()> {
    transform::apply(input, &DnBrightness::new(gain, bias, k1, k2), output)
}
