//! Tests for nice tick generation.

use super::*;

fn assert_ticks(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "ticks: {actual:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "ticks: {actual:?}, expected {expected:?}");
    }
}

#[test]
fn zero_to_hundred_by_five() {
    let ticks = linear_ticks(0.0, 100.0, 5);
    assert_ticks(&ticks, &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
}

#[test]
fn ticks_are_multiples_of_a_nice_step() {
    let ticks = linear_ticks(0.0, 100.0, 5);
    let step = tick_step(0.0, 100.0, 5).unwrap();
    assert!((step - 20.0).abs() < f64::EPSILON);
    for t in &ticks {
        let ratio = t / step;
        assert!((ratio - ratio.round()).abs() < 1e-9);
    }
    // Never the raw quotient of an awkward span
    let odd = linear_ticks(0.0, 97.0, 7);
    assert!(odd.iter().all(|t| (t % 10.0).abs() < 1e-9), "{odd:?}");
}

#[test]
fn fractional_steps_stay_exact() {
    let ticks = linear_ticks(0.0, 1.0, 10);
    assert_eq!(ticks.len(), 11);
    assert!((ticks[3] - 0.3).abs() < f64::EPSILON);
}

#[test]
fn rt_style_domain() {
    let ticks = linear_ticks(0.0, 4.5, 5);
    assert_ticks(&ticks, &[0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn reversed_span_reverses_ticks() {
    let ticks = linear_ticks(100.0, 0.0, 5);
    assert_ticks(&ticks, &[100.0, 80.0, 60.0, 40.0, 20.0, 0.0]);
}

#[test]
fn zero_count_is_empty() {
    assert!(linear_ticks(0.0, 10.0, 0).is_empty());
}

#[test]
fn equal_bounds_yield_single_tick() {
    assert_ticks(&linear_ticks(3.0, 3.0, 5), &[3.0]);
}

#[test]
fn negative_domains() {
    let ticks = linear_ticks(-10.0, 10.0, 4);
    assert_ticks(&ticks, &[-10.0, -5.0, 0.0, 5.0, 10.0]);
}

#[test]
fn count_never_exceeds_margin() {
    let spans = [
        (0.0, 1.4),
        (0.0, 100.0),
        (-3.7, 12.9),
        (0.001, 0.0093),
        (1_000.0, 1_000_000.0),
        (0.0, 4.5),
    ];
    for (start, stop) in spans {
        for count in 1..=20 {
            let ticks = linear_ticks(start, stop, count);
            #[allow(
                clippy::cast_precision_loss,
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss
            )]
            let bound = (count as f64 * std::f64::consts::SQRT_2).ceil() as usize + 1;
            assert!(
                ticks.len() <= bound,
                "[{start}, {stop}] count {count} gave {} ticks",
                ticks.len()
            );
            assert!(ticks.iter().all(|t| *t >= start - 1e-12 && *t <= stop + 1e-12));
        }
    }
}

#[test]
fn subnormal_span_yields_no_ticks() {
    assert!(linear_ticks(0.0, 1e-320, 5).is_empty());
    assert!(tick_step(0.0, 1e-320, 5).is_none());
}

#[test]
fn tiny_normal_span_still_ticks() {
    let ticks = linear_ticks(0.0, 1e-300, 5);
    assert!(!ticks.is_empty() && ticks.len() <= 9, "ticks: {ticks:?}");
}

mod format_tests {
    use super::*;

    #[test]
    fn integer_step_has_no_decimals() {
        assert_eq!(format_number(20.0, 20.0), "20");
    }

    #[test]
    fn fractional_step_keeps_needed_decimals() {
        assert_eq!(format_number(0.5, 0.5), "0.5");
        assert_eq!(format_number(1.0, 0.5), "1.0");
        assert_eq!(format_number(0.25, 0.05), "0.25");
    }

    #[test]
    fn negative_zero_is_trimmed() {
        assert_eq!(format_number(-0.000_01, 0.1), "0.0");
        assert_eq!(format_number(-0.0, 1.0), "0");
    }
}
