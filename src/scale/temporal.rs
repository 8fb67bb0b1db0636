//! Continuous temporal scale for date domains.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use super::linear::LinearScale;
use super::ticks::tick_step;
use super::{DegeneratePolicy, Scale};
use crate::Result;

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Calendar interval used to place temporal ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeInterval {
    /// Fixed multiple of milliseconds, aligned to the epoch.
    Fixed(i64),
    /// Midnights whose day of month is `1 + k * n`.
    Days(u32),
    /// Sunday midnights.
    Weeks,
    /// First of every `n`-th month (January aligned).
    Months(u32),
    /// January 1st of years divisible by `n`.
    Years(i32),
}

impl TimeInterval {
    /// Approximate duration of one step, for choosing an interval.
    const fn approx_millis(self) -> i64 {
        match self {
            Self::Fixed(ms) => ms,
            Self::Days(n) => n as i64 * DAY,
            Self::Weeks => WEEK,
            Self::Months(n) => n as i64 * MONTH,
            Self::Years(n) => n as i64 * YEAR,
        }
    }
}

/// Candidate intervals from finest to coarsest.
const INTERVALS: [TimeInterval; 18] = [
    TimeInterval::Fixed(SECOND),
    TimeInterval::Fixed(5 * SECOND),
    TimeInterval::Fixed(15 * SECOND),
    TimeInterval::Fixed(30 * SECOND),
    TimeInterval::Fixed(MINUTE),
    TimeInterval::Fixed(5 * MINUTE),
    TimeInterval::Fixed(15 * MINUTE),
    TimeInterval::Fixed(30 * MINUTE),
    TimeInterval::Fixed(HOUR),
    TimeInterval::Fixed(3 * HOUR),
    TimeInterval::Fixed(6 * HOUR),
    TimeInterval::Fixed(12 * HOUR),
    TimeInterval::Days(1),
    TimeInterval::Days(2),
    TimeInterval::Weeks,
    TimeInterval::Months(1),
    TimeInterval::Months(3),
    TimeInterval::Years(1),
];

/// Linear mapping from a date span to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemporalScale {
    start: NaiveDateTime,
    end: NaiveDateTime,
    inner: LinearScale,
}

#[allow(clippy::cast_precision_loss)]
fn to_millis(date: NaiveDateTime) -> f64 {
    date.and_utc().timestamp_millis() as f64
}

#[allow(clippy::cast_possible_truncation)]
fn from_millis(ms: f64) -> Option<NaiveDateTime> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(ms.round() as i64).map(|d| d.naive_utc())
}

impl TemporalScale {
    /// Build a scale over `[start, end]`, rejecting zero-width spans.
    ///
    /// # Errors
    /// Returns `Domain` if `start == end` or a range bound is not finite.
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        range_min: f64,
        range_max: f64,
    ) -> Result<Self> {
        Self::with_policy(start, end, range_min, range_max, DegeneratePolicy::Reject)
    }

    /// Build a scale with an explicit policy for zero-width spans.
    ///
    /// # Errors
    /// Returns `Domain` if a range bound is not finite, or if `start == end`
    /// under `DegeneratePolicy::Reject`.
    pub fn with_policy(
        start: NaiveDateTime,
        end: NaiveDateTime,
        range_min: f64,
        range_max: f64,
        policy: DegeneratePolicy,
    ) -> Result<Self> {
        let inner = LinearScale::with_policy(
            to_millis(start),
            to_millis(end),
            range_min,
            range_max,
            policy,
        )?;
        Ok(Self { start, end, inner })
    }

    #[must_use]
    pub const fn domain(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.start, self.end)
    }

    fn span(&self) -> (NaiveDateTime, NaiveDateTime) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    /// Pick the interval whose step count is closest (by ratio) to `count`.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn interval(&self, count: usize) -> TimeInterval {
        let (lo, hi) = self.span();
        let target = (to_millis(hi) - to_millis(lo)) / count.max(1) as f64;

        let Some(i) = INTERVALS
            .iter()
            .position(|iv| iv.approx_millis() as f64 > target)
        else {
            let years_lo = f64::from(lo.year());
            let years_hi = f64::from(hi.year()).max(years_lo + 1.0);
            let step = tick_step(years_lo, years_hi, count).unwrap_or(1.0);
            return TimeInterval::Years((step.round() as i32).max(1));
        };

        if i == 0 {
            return INTERVALS[0];
        }
        let below = INTERVALS[i - 1].approx_millis() as f64;
        let above = INTERVALS[i].approx_millis() as f64;
        if target / below < above / target {
            INTERVALS[i - 1]
        } else {
            INTERVALS[i]
        }
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// First midnight at or after `at`.
fn first_day_at_or_after(at: NaiveDateTime) -> Option<NaiveDate> {
    if at.time() == NaiveTime::MIN {
        Some(at.date())
    } else {
        at.date().succ_opt()
    }
}

fn first_month_at_or_after(at: NaiveDateTime) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(at.year(), at.month(), 1)?;
    if midnight(first) >= at {
        Some(first)
    } else {
        next_month(first)
    }
}

fn next_month(first: NaiveDate) -> Option<NaiveDate> {
    if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
}

fn fixed_ticks(lo: NaiveDateTime, hi: NaiveDateTime, step: i64) -> Vec<NaiveDateTime> {
    let lo_ms = lo.and_utc().timestamp_millis();
    let hi_ms = hi.and_utc().timestamp_millis();
    let mut at = lo_ms.div_euclid(step) * step;
    if at < lo_ms {
        at += step;
    }
    let mut ticks = Vec::new();
    while at <= hi_ms {
        if let Some(date) = DateTime::from_timestamp_millis(at) {
            ticks.push(date.naive_utc());
        }
        at += step;
    }
    ticks
}

fn day_ticks<F>(lo: NaiveDateTime, hi: NaiveDateTime, keep: F) -> Vec<NaiveDateTime>
where
    F: Fn(NaiveDate) -> bool,
{
    let mut ticks = Vec::new();
    let mut day = first_day_at_or_after(lo);
    while let Some(d) = day {
        if midnight(d) > hi {
            break;
        }
        if keep(d) {
            ticks.push(midnight(d));
        }
        day = d.succ_opt();
    }
    ticks
}

fn month_ticks(lo: NaiveDateTime, hi: NaiveDateTime, every: u32) -> Vec<NaiveDateTime> {
    let mut ticks = Vec::new();
    let mut month = first_month_at_or_after(lo);
    while let Some(m) = month {
        if midnight(m) > hi {
            break;
        }
        if m.month0() % every == 0 {
            ticks.push(midnight(m));
        }
        month = next_month(m);
    }
    ticks
}

fn year_ticks(lo: NaiveDateTime, hi: NaiveDateTime, every: i32) -> Vec<NaiveDateTime> {
    (lo.year()..=hi.year())
        .filter(|year| year.rem_euclid(every) == 0)
        .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        .map(midnight)
        .filter(|at| *at >= lo && *at <= hi)
        .collect()
}

impl Scale for TemporalScale {
    type Value = NaiveDateTime;

    fn map(&self, value: NaiveDateTime) -> f64 {
        self.inner.map(to_millis(value))
    }

    fn invert(&self, pixel: f64) -> NaiveDateTime {
        from_millis(self.inner.invert(pixel)).unwrap_or(self.start)
    }

    fn range(&self) -> (f64, f64) {
        self.inner.range()
    }

    fn ticks(&self, count: usize) -> Vec<NaiveDateTime> {
        if count == 0 {
            return Vec::new();
        }
        if self.inner.is_degenerate() {
            return vec![self.start];
        }
        let (lo, hi) = self.span();
        let mut ticks = match self.interval(count) {
            TimeInterval::Fixed(step) => fixed_ticks(lo, hi, step),
            TimeInterval::Days(every) => day_ticks(lo, hi, |d| d.day0() % every == 0),
            TimeInterval::Weeks => day_ticks(lo, hi, |d| d.weekday() == Weekday::Sun),
            TimeInterval::Months(every) => month_ticks(lo, hi, every),
            TimeInterval::Years(every) => year_ticks(lo, hi, every),
        };
        if self.start > self.end {
            ticks.reverse();
        }
        ticks
    }

    fn format_tick(&self, value: NaiveDateTime, count: usize) -> String {
        let pattern = match self.interval(count) {
            TimeInterval::Fixed(step) if step < MINUTE => "%H:%M:%S",
            TimeInterval::Fixed(_) => "%H:%M",
            TimeInterval::Days(_) | TimeInterval::Weeks => "%b %d",
            TimeInterval::Months(_) if value.month() == 1 => "%Y",
            TimeInterval::Months(_) => "%b",
            TimeInterval::Years(_) => "%Y",
        };
        value.format(pattern).to_string()
    }
}

#[cfg(test)]
#[path = "temporal_tests.rs"]
mod tests;
