//! Tests for `LineGenerator`.

use super::*;
use crate::dataset::Observation;
use crate::scale::{LinearScale, Scale, TemporalScale};
use crate::test_fixtures::{day, obs};

#[test]
fn preserves_input_order() {
    let data = [(3.0, 1.0), (1.0, 2.0), (2.0, 3.0)];
    let line = LineGenerator::new(|d: &(f64, f64)| d.0, |d: &(f64, f64)| d.1).generate(&data);
    let xs: Vec<f64> = line.points().map(|p| p.x).collect();
    assert_eq!(xs, vec![3.0, 1.0, 2.0]);
    assert_eq!(line.segments.len(), 1);
}

#[test]
fn non_finite_breaks_segment() {
    let data = [(0.0, 1.0), (1.0, f64::NAN), (2.0, 3.0), (3.0, 4.0)];
    let line = LineGenerator::new(|d: &(f64, f64)| d.0, |d: &(f64, f64)| d.1).generate(&data);
    assert_eq!(line.segments.len(), 2);
    assert_eq!(line.segments[0], vec![Point::new(0.0, 1.0)]);
    assert_eq!(line.segments[1], vec![Point::new(2.0, 3.0), Point::new(3.0, 4.0)]);
}

#[test]
fn leading_and_trailing_gaps_make_no_empty_segments() {
    let data = [(f64::NAN, 0.0), (1.0, 1.0), (2.0, f64::INFINITY)];
    let line = LineGenerator::new(|d: &(f64, f64)| d.0, |d: &(f64, f64)| d.1).generate(&data);
    assert_eq!(line.segments, vec![vec![Point::new(1.0, 1.0)]]);
}

#[test]
fn empty_input_is_empty_path() {
    let data: [(f64, f64); 0] = [];
    let line = LineGenerator::new(|d: &(f64, f64)| d.0, |d: &(f64, f64)| d.1).generate(&data);
    assert!(line.is_empty());
}

#[test]
fn observations_through_scales() {
    let x = TemporalScale::new(day(1), day(3), 0.0, 100.0).unwrap();
    let y = LinearScale::new(0.0, 4.0, 200.0, 0.0).unwrap();
    let data = vec![obs(1, 0.0, 0.0, 1.0), obs(2, 2.0, 1.0, 3.0), obs(3, 4.0, 3.0, 4.0)];

    let generator = LineGenerator::new(
        |o: &Observation| x.map(o.date),
        |o: &Observation| y.map(o.central),
    );
    let line = generator.generate(&data);
    let points: Vec<Point> = line.points().copied().collect();
    assert_eq!(points[0], Point::new(0.0, 200.0));
    assert_eq!(points[2], Point::new(100.0, 0.0));
    assert!((points[1].x - 50.0).abs() < 1e-9);
    assert!((points[1].y - 100.0).abs() < 1e-9);
}

#[test]
fn generating_twice_is_identical() {
    let data = vec![obs(1, 1.0, 0.5, 1.5), obs(4, 1.3, 0.9, 1.8)];
    let generator = LineGenerator::new(
        |o: &Observation| o.date.and_utc().timestamp() as f64,
        |o: &Observation| o.central,
    );
    assert_eq!(generator.generate(&data), generator.generate(&data));
}
