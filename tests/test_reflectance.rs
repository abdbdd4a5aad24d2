mod common;

use approx::assert_relative_eq;
use chrono::NaiveDate;
use ndarray::array;
use std::f64::consts::PI;
use toar::core::{reflectance, EarthSunFormula, PhysicalReflectance};

#[test]
fn test_physical_reflectance_for_acquisition_date() {
    common::init_logging();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let source = common::write_scene(dir.path(), "radiance.tif", &array![[85.5, -9999.0]], Some(-9999.0));
    let output = dir.path().join("reflectance.tif");

    let acquired = NaiveDate::from_ymd_opt(2013, 6, 21)
        .expect("valid date")
        .and_hms_opt(10, 15, 0)
        .expect("valid time");
    let params = PhysicalReflectance::for_date(&acquired, EarthSunFormula::Spencer, 64.0, 1547.0);

    reflectance::physical(&source, params.earth_sun_dist, params.sun_elev, params.esun, &output)
        .expect("Conversion failed");

    let band = common::read_scene(&output);
    let d = params.earth_sun_dist;
    let expected = (PI * 85.5 * d * d) / 1547.0 * 26f64.to_radians().cos() / 64f64.to_radians().sin();
    assert_relative_eq!(band.data[[0, 0]], expected, epsilon = 1e-6);
    assert_eq!(band.data[[0, 1]], -9999.0);
}

#[test]
fn test_physical_reflectance_zero_elevation_regression() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let source = common::write_scene(dir.path(), "radiance.tif", &array![[100.0]], None);
    let output = dir.path().join("reflectance.tif");

    reflectance::physical(&source, 1.0, 0.0, 1000.0, &output).expect("Conversion failed");

    let band = common::read_scene(&output);
    // cos(90 deg) term only, no division by sin(0)
    let expected = (PI * 100.0) / 1000.0 * 90f64.to_radians().cos();
    assert!(band.data[[0, 0]].is_finite());
    assert_relative_eq!(band.data[[0, 0]], expected, epsilon = 1e-12);
}

#[test]
fn test_gainbias_reflectance_corrects_for_sun_elevation() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let source = common::write_scene(dir.path(), "dn.tif", &array![[10000.0, 0.0]], Some(0.0));
    let output = dir.path().join("reflectance.tif");

    reflectance::gainbias(&source, 2.0e-5, -0.1, 30.0, &output).expect("Conversion failed");

    let band = common::read_scene(&output);
    assert_relative_eq!(band.data[[0, 0]], 0.2, epsilon = 1e-6);
    assert_eq!(band.data[[0, 1]], 0.0);
}

#[test]
fn test_gainbias_reflectance_zero_elevation_is_infinite() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let source = common::write_scene(dir.path(), "dn.tif", &array![[10000.0]], None);
    let output = dir.path().join("reflectance.tif");

    reflectance::gainbias(&source, 2.0e-5, -0.1, 0.0, &output).expect("Conversion failed");

    assert!(common::read_scene(&output).data[[0, 0]].is_infinite());
}

#[test]
fn test_rescale_reflectance() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let source = common::write_scene(dir.path(), "dn.tif", &array![[15000.0]], None);
    let output = dir.path().join("reflectance.tif");

    reflectance::rescale(&source, 2.0e-5, -0.1, &output).expect("Conversion failed");

    assert_relative_eq!(common::read_scene(&output).data[[0, 0]], 0.2, epsilon = 1e-6);
}
