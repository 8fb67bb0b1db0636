//! Tests for `AreaGenerator`.

use super::*;
use crate::ChartError;
use crate::shape::PathSpec;

#[derive(Debug, Clone, Copy)]
struct Datum {
    d: f64,
    low: f64,
    high: f64,
}

const fn datum(d: f64, low: f64, high: f64) -> Datum {
    Datum { d, low, high }
}

fn identity_generator() -> AreaGenerator<
    impl Fn(&Datum) -> f64,
    impl Fn(&Datum) -> f64,
    impl Fn(&Datum) -> f64,
> {
    AreaGenerator::new(|p: &Datum| p.d, |p: &Datum| p.low, |p: &Datum| p.high)
}

#[test]
fn upper_forward_lower_reversed() {
    let data = [datum(1.0, 1.0, 3.0), datum(2.0, 2.0, 4.0)];
    let area = identity_generator().generate(&data).unwrap();

    assert_eq!(area.bands.len(), 1);
    assert_eq!(
        area.bands[0].upper,
        vec![Point::new(1.0, 3.0), Point::new(2.0, 4.0)]
    );
    assert_eq!(
        area.bands[0].lower,
        vec![Point::new(2.0, 2.0), Point::new(1.0, 1.0)]
    );
}

#[test]
fn inverted_band_is_rejected() {
    let data = [datum(1.0, 5.0, 2.0)];
    match identity_generator().generate(&data) {
        Err(ChartError::InvalidBand { index, low, high }) => {
            assert_eq!(index, 0);
            assert!((low - 5.0).abs() < f64::EPSILON);
            assert!((high - 2.0).abs() < f64::EPSILON);
        }
        other => panic!("expected InvalidBand, got {other:?}"),
    }
}

#[test]
fn zero_width_band_is_allowed() {
    let data = [datum(1.0, 2.0, 2.0)];
    assert!(identity_generator().generate(&data).is_ok());
}

#[test]
fn projection_applies_after_band_check() {
    // Inverted pixel range: high values get smaller y
    let data = [datum(0.0, 1.0, 3.0)];
    let area = identity_generator()
        .with_projection(|v: f64| 100.0 - v * 10.0)
        .generate(&data)
        .unwrap();
    assert_eq!(area.bands[0].upper, vec![Point::new(0.0, 70.0)]);
    assert_eq!(area.bands[0].lower, vec![Point::new(0.0, 90.0)]);
}

#[test]
fn gaps_split_bands() {
    let data = [
        datum(1.0, 1.0, 2.0),
        datum(2.0, f64::NAN, 2.0),
        datum(3.0, 1.0, 2.0),
        datum(4.0, 1.5, 2.5),
    ];
    let area = identity_generator().generate(&data).unwrap();
    assert_eq!(area.bands.len(), 2);
    assert_eq!(area.bands[1].upper.len(), 2);
    assert_eq!(area.bands[1].lower[0], Point::new(4.0, 1.5));
}

#[test]
fn generating_twice_is_identical() {
    let data = [datum(1.0, 1.0, 3.0), datum(2.0, 2.0, 4.0)];
    let generator = identity_generator();
    assert_eq!(
        generator.generate(&data).unwrap(),
        generator.generate(&data).unwrap()
    );
}

#[test]
fn svg_data_for_example_band() {
    let data = [datum(1.0, 1.0, 3.0), datum(2.0, 2.0, 4.0)];
    let area = identity_generator().generate(&data).unwrap();
    assert_eq!(
        PathSpec::from(area).to_svg_path(),
        "M1,3 L2,4 L2,2 L1,1 Z"
    );
}
