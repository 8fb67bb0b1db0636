//! Nice tick generation and number formatting.

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Integer tick indices and how to turn them back into values.
///
/// A negative `increment` means "divide by `-increment`", which keeps
/// fractional steps such as 0.1 exact.
#[derive(Debug, Clone, Copy)]
struct TickSpec {
    first: i64,
    last: i64,
    increment: f64,
}

impl TickSpec {
    fn value(&self, index: i64) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let i = index as f64;
        if self.increment < 0.0 {
            i / -self.increment
        } else {
            i * self.increment
        }
    }

    fn step(&self) -> f64 {
        if self.increment < 0.0 {
            1.0 / -self.increment
        } else {
            self.increment
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<TickSpec> {
    if count <= 0.0 || !start.is_finite() || !stop.is_finite() {
        return None;
    }
    let raw_step = (stop - start) / count;
    if raw_step <= 0.0 {
        return None;
    }
    let power = raw_step.log10().floor();
    let error = raw_step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut first, mut last, increment) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        if !(inc.is_finite() && inc > 0.0) {
            return None;
        }
        let mut first = (start * inc).round() as i64;
        let mut last = (stop * inc).round() as i64;
        if (first as f64) / inc < start {
            first += 1;
        }
        if (last as f64) / inc > stop {
            last -= 1;
        }
        (first, last, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        if !(inc.is_finite() && inc > 0.0) {
            return None;
        }
        let mut first = (start / inc).round() as i64;
        let mut last = (stop / inc).round() as i64;
        if (first as f64) * inc < start {
            first += 1;
        }
        if (last as f64) * inc > stop {
            last -= 1;
        }
        (first, last, inc)
    };

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    if last < first {
        // Nothing fits; fall back to an empty range rather than a negative span.
        first = 0;
        last = -1;
    }
    // Indices saturate when the step underflows or the values overflow i64
    let max_span = (count.ceil() as i64).saturating_mul(2).saturating_add(2);
    if last.saturating_sub(first) > max_span {
        return None;
    }
    Some(TickSpec {
        first,
        last,
        increment,
    })
}

/// Nice step size for about `count` ticks between `start` and `stop`.
///
/// Returns `None` for an empty or non-finite span or a zero count.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    let (lo, hi) = if start <= stop {
        (start, stop)
    } else {
        (stop, start)
    };
    #[allow(clippy::cast_precision_loss)]
    tick_spec(lo, hi, count as f64).map(|spec| spec.step())
}

/// Tick values that are multiples of a 1/2/5 × 10^n step inside `[start, stop]`.
///
/// Values come back in the direction of the input span. At most
/// `ceil(count * sqrt(2)) + 1` values are produced.
#[must_use]
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    #[allow(clippy::float_cmp)]
    if start == stop {
        return vec![start];
    }

    let reversed = stop < start;
    let (lo, hi) = if reversed { (stop, start) } else { (start, stop) };

    #[allow(clippy::cast_precision_loss)]
    let Some(spec) = tick_spec(lo, hi, count as f64) else {
        return Vec::new();
    };

    let mut ticks: Vec<f64> = (spec.first..=spec.last).map(|i| spec.value(i)).collect();
    if reversed {
        ticks.reverse();
    }
    ticks
}

/// Format a tick value with just enough decimals for `step`.
#[must_use]
pub fn format_number(value: f64, step: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let formatted = format!("{value:.decimals$}");
    // Avoid "-0" / "-0.0" for values that round to zero
    if formatted.starts_with('-') && formatted[1..].chars().all(|c| c == '0' || c == '.') {
        formatted[1..].to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
#[path = "ticks_tests.rs"]
mod tests;
