//! Core radiometric conversion modules

pub mod earth_sun;
pub mod transform;
pub mod radiance;
pub mod reflectance;
pub mod brightness;
pub mod conversion;

// Re-export main types
pub use earth_sun::{earth_sun_distance, earth_sun_distance_named, EarthSunFormula};
pub use transform::{apply, apply_formula, transform_band, PixelConversion};
pub use radiance::{RadianceGainBias, RadianceScaling};
pub use reflectance::{PhysicalReflectance, ReflectanceGainBias, ReflectanceRescale};
pub use brightness::{DnBrightness, RadianceBrightness, ThermalConstants};
pub use conversion::Conversion;
