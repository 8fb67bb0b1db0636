//! Tests for `LinearScale`.

use super::*;

#[test]
fn endpoints_map_exactly() {
    let scale = LinearScale::new(0.0, 4.5, 180.0, 0.0).unwrap();
    assert!(scale.map(0.0).to_bits() == 180.0f64.to_bits());
    assert!(scale.map(4.5).to_bits() == 0.0f64.to_bits());
}

#[test]
fn endpoints_hold_for_awkward_values() {
    let domains = [(0.1, 0.7), (-3.3, 17.9), (1e-6, 2e-6), (1_583_107_200_000.0, 1_590_000_000_000.0)];
    let ranges = [(0.0, 415.0), (180.0, 0.0), (-7.3, 12.1)];
    for (a, b) in domains {
        for (p, q) in ranges {
            let scale = LinearScale::new(a, b, p, q).unwrap();
            assert!(scale.map(a).to_bits() == p.to_bits(), "[{a},{b}] -> [{p},{q}]");
            assert!(scale.map(b).to_bits() == q.to_bits(), "[{a},{b}] -> [{p},{q}]");
        }
    }
}

#[test]
fn interpolates_linearly() {
    let scale = LinearScale::new(0.0, 100.0, 0.0, 500.0).unwrap();
    assert!((scale.map(50.0) - 250.0).abs() < 1e-9);
    assert!((scale.map(10.0) - 50.0).abs() < 1e-9);
}

#[test]
fn monotonic_matches_direction() {
    let increasing = LinearScale::new(0.0, 10.0, 0.0, 100.0).unwrap();
    let decreasing = LinearScale::new(0.0, 10.0, 100.0, 0.0).unwrap();
    let mut prev_up = f64::NEG_INFINITY;
    let mut prev_down = f64::INFINITY;
    for i in 0..=100 {
        let x = f64::from(i) / 10.0;
        let up = increasing.map(x);
        let down = decreasing.map(x);
        assert!(up >= prev_up);
        assert!(down <= prev_down);
        prev_up = up;
        prev_down = down;
    }
}

#[test]
fn invert_round_trips() {
    let scale = LinearScale::new(-3.5, 12.25, 415.0, 10.0).unwrap();
    for i in -40..=130 {
        let x = f64::from(i) / 10.0;
        let back = scale.invert(scale.map(x));
        assert!((back - x).abs() < 1e-9, "{x} -> {back}");
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let scale = LinearScale::new(0.3, 9.7, 12.0, 611.0).unwrap();
    let a = scale.map(4.2);
    let b = scale.map(4.2);
    assert_eq!(a.to_bits(), b.to_bits());
}

mod domain_error_tests {
    use super::*;

    #[test]
    fn zero_width_domain_is_rejected() {
        let result = LinearScale::new(2.0, 2.0, 0.0, 100.0);
        assert!(matches!(result, Err(ChartError::Domain(_))));
    }

    #[test]
    fn non_finite_domain_is_rejected() {
        assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 1.0).is_err());
        assert!(LinearScale::new(0.0, f64::INFINITY, 0.0, 1.0).is_err());
        assert!(LinearScale::new(0.0, 1.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn overflowing_domain_width_is_rejected() {
        let result = LinearScale::new(-1e308, 1e308, 0.0, 100.0);
        assert!(matches!(result, Err(ChartError::Domain(_))));
        assert!(LinearScale::new(-1e307, 1e307, 0.0, 100.0).is_ok());
    }

    #[test]
    fn constant_policy_maps_to_midpoint() {
        let scale =
            LinearScale::with_policy(2.0, 2.0, 0.0, 100.0, DegeneratePolicy::Constant).unwrap();
        assert!(scale.is_degenerate());
        assert!((scale.map(2.0) - 50.0).abs() < f64::EPSILON);
        assert!((scale.map(-1e6) - 50.0).abs() < f64::EPSILON);
        assert!((scale.invert(13.0) - 2.0).abs() < f64::EPSILON);
        assert_eq!(scale.ticks(5), vec![2.0]);
    }
}

mod tick_tests {
    use super::*;

    #[test]
    fn ticks_follow_domain() {
        let scale = LinearScale::new(0.0, 100.0, 180.0, 0.0).unwrap();
        let ticks = scale.ticks(5);
        assert_eq!(ticks.len(), 6);
        assert!((ticks[1] - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn labels_use_step_precision() {
        let scale = LinearScale::new(0.0, 1.0, 0.0, 100.0).unwrap();
        assert_eq!(scale.format_tick(0.2, 5), "0.2");
        let scale = LinearScale::new(0.0, 100.0, 0.0, 100.0).unwrap();
        assert_eq!(scale.format_tick(40.0, 5), "40");
    }

    #[test]
    fn nice_extends_to_step_multiples() {
        let scale = LinearScale::new(0.7, 4.3, 180.0, 0.0).unwrap().nice(5);
        let (lo, hi) = scale.domain();
        assert!((lo - 0.0).abs() < 1e-9);
        assert!((hi - 5.0).abs() < 1e-9);
        assert_eq!(scale.range(), (180.0, 0.0));
    }

    #[test]
    fn nice_leaves_subnormal_domain_unchanged() {
        let scale = LinearScale::new(0.0, 1e-320, 180.0, 0.0).unwrap();
        assert_eq!(scale.nice(5).domain(), (0.0, 1e-320));
        assert!(scale.ticks(5).is_empty());
    }
}
