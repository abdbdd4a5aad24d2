mod common;

use approx::assert_relative_eq;
use ndarray::array;
use toar::core::radiance;

#[test]
fn test_scaling_maps_qcal_range_onto_radiance_range() {
    common::init_logging();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let source = common::write_scene(dir.path(), "dn.tif", &array![[1.0, 128.0], [255.0, 0.0]], Some(0.0));
    let output = dir.path().join("radiance.tif");

    // Landsat 7 ETM+ band 3, high gain
    radiance::scaling(&source, -5.0, 234.4, 1.0, 255.0, &output).expect("Conversion failed");

    let band = common::read_scene(&output);
    assert_relative_eq!(band.data[[0, 0]], -5.0, epsilon = 1e-5);
    assert_relative_eq!(band.data[[1, 0]], 234.4, epsilon = 1e-4);
    assert_relative_eq!(band.data[[0, 1]], (239.4 / 254.0) * 127.0 - 5.0, epsilon = 1e-4);
    assert_eq!(band.data[[1, 1]], 0.0);
}

#[test]
fn test_gainbias_applies_rescaling_coefficients() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let source = common::write_scene(dir.path(), "dn.tif", &array![[7000.0, 9500.0, 12000.0]], Some(0.0));
    let output = dir.path().join("radiance.tif");

    // Landsat 8 OLI band 4 RADIANCE_MULT / RADIANCE_ADD
    radiance::gainbias(&source, 9.8562e-3, -49.28, &output).expect("Conversion failed");

    let band = common::read_scene(&output);
    for (&dn, &rad) in [7000.0, 9500.0, 12000.0].iter().zip(band.data.iter()) {
        assert_relative_eq!(rad, 9.8562e-3 * dn - 49.28, epsilon = 1e-4);
    }
}
