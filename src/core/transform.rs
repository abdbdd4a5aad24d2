//! Single-band raster transform shared by every conversion
//!
//! A conversion only supplies its per-pixel formula. Reading the source band,
//! reinstating nodata, creating the destination and copying georeferencing all
//! happen here.

use crate::io::{RasterReader, RasterWriter};
use crate::types::{Band, ToaImage, ToaResult};
use std::path::Path;

/// Per-pixel radiometric formula
pub trait PixelConversion {
    /// Short human-readable name used in log output
    fn name(&self) -> &'static str;

    /// Convert one source sample. Degenerate inputs yield inf/NaN rather than errors.
    fn convert(&self, value: f64) -> f64;
}

/// Apply `formula` to every sample, then overwrite cells equal to `no_data`
/// in the *source* with `no_data`.
///
/// Equality is exact, so a NaN marker never matches.
pub fn apply_formula<F>(source: &ToaImage, no_data: Option<f64>, formula: F) -> ToaImage
where
    F: Fn(f64) -> f64,
{
    let mut target = source.mapv(&formula);
    if let Some(no_data) = no_data {
        target.zip_mut_with(source, |out, &src| {
            if src == no_data {
                *out = no_data;
            }
        });
    }
    target
}

/// Convert an in-memory band, keeping its nodata marker and georeferencing
pub fn transform_band<C: PixelConversion + ?Sized>(band: &Band, conversion: &C) -> Band {
    let data = apply_formula(&band.data, band.no_data, |v| conversion.convert(v));
    band.with_data(data)
}

/// Read band 1 of `input`, convert it and write the result to `output` as a
/// new Float32 raster.
///
/// `output` must not exist; this is checked before the source is opened.
pub fn apply<C, P, Q>(input: P, conversion: &C, output: Q) -> ToaResult<()>
where
    C: PixelConversion + ?Sized,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();
    RasterWriter::ensure_absent(output)?;

    log::info!(
        "Applying {} conversion: {} -> {}",
        conversion.name(),
        input.display(),
        output.display()
    );

    let source = RasterReader::read_band(input)?;
    let target = transform_band(&source, conversion);
    RasterWriter::write_band(output, &target)?;

    let (rows, cols) = target.dim();
    log::info!("{} conversion completed ({}x{} pixels)", conversion.name(), cols, rows);
    Ok(())
}
