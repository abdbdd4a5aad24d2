//! Digital numbers to top-of-atmosphere spectral radiance
//!
//! Suitable for both reflective and emissive bands.

use crate::core::transform::{self, PixelConversion};
use crate::types::ToaResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Typical minimum quantized calibrated pixel value
pub const DEFAULT_QCALMIN: f64 = 1.0;
/// Typical maximum quantized calibrated pixel value (8-bit products)
pub const DEFAULT_QCALMAX: f64 = 255.0;

/// Linear rescaling: `gain * dn + bias`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadianceGainBias {
    /// Band specific multiplicative rescaling factor
    pub gain: f64,
    /// Band specific additive rescaling factor
    pub bias: f64,
}

impl RadianceGainBias {
    pub fn new(gain: f64, bias: f64) -> Self {
        Self { gain, bias }
    }
}

impl PixelConversion for RadianceGainBias {
    fn name(&self) -> &'static str {
        "radiance gain/bias"
    }

    fn convert(&self, value: f64) -> f64 {
        self.gain * value + self.bias
    }
}

/// Spectral radiance scaling between LMIN/LMAX and QCALMIN/QCALMAX.
///
/// `qcalmax == qcalmin` divides by zero and yields inf/NaN samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadianceScaling {
    /// Spectral radiance scaled to `qcalmin`
    pub lmin: f64,
    /// Spectral radiance scaled to `qcalmax`
    pub lmax: f64,
    pub qcalmin: f64,
    pub qcalmax: f64,
}

impl RadianceScaling {
    /// Scaling with the typical 1..255 quantization range
    pub fn new(lmin: f64, lmax: f64) -> Self {
        Self {
            lmin,
            lmax,
            qcalmin: DEFAULT_QCALMIN,
            qcalmax: DEFAULT_QCALMAX,
        }
    }

    pub fn with_qcal_range(mut self, qcalmin: f64, qcalmax: f64) -> Self {
        self.qcalmin = qcalmin;
        self.qcalmax = qcalmax;
        self
    }

    /// Radiance per quantized step
    pub fn rescale_gain(&self) -> f64 {
        (self.lmax - self.lmin) / (self.qcalmax - self.qcalmin)
    }
}

impl PixelConversion for RadianceScaling {
    fn name(&self) -> &'static str {
        "radiance scaling"
    }

    fn convert(&self, value: f64) -> f64 {
        self.rescale_gain() * (value - self.qcalmin) + self.lmin
    }
}

/// Convert a DN scene to radiance with the gain and bias method.
pub fn gainbias<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    gain: f64,
    bias: f64,
    output: Q,
) -> ToaResult<()> {
    transform::apply(input, &RadianceGainBias::new(gain, bias), output)
}

/// Convert a DN scene to radiance with the spectral radiance scaling method.
pub fn scaling<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    lmin: f64,
    lmax: f64,
    qcalmin: f64,
    qcalmax: f64,
    output: Q,
) -> ToaResult<()> {
    let conversion = RadianceScaling::new(lmin, lmax).with_qcal_range(qcalmin, qcalmax);
    transform::apply(input, &conversion, output)
}
