use std::fmt;

use yansi::Color::Blue;

use crate::format::F64Formatter;
use crate::stats::quantile::{quantile_sorted, sort_values};

#[derive(Debug, Clone, Copy, PartialEq)]
/// A five-number summary of a set of numerical values.
///
/// For every summary `min <= q1 <= median <= q3 <= max` holds.
pub struct Summary {
    /// Smallest value.
    pub min: f64,
    /// First quartile (0.25 quantile).
    pub q1: f64,
    /// Median (0.5 quantile).
    pub median: f64,
    /// Third quartile (0.75 quantile).
    pub q3: f64,
    /// Largest value.
    pub max: f64,
}

impl Summary {
    /// Creates a Summary from unsorted numerical data.  Returns `None` if
    /// `vec` is empty.
    ///
    /// Values are expected to be finite.
    pub fn new(vec: &[f64]) -> Option<Self> {
        let mut sorted = vec.to_vec();
        sort_values(&mut sorted);
        Self::from_sorted(&sorted)
    }

    /// Creates a Summary from data already sorted in ascending order.
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        Some(Self {
            min: *sorted.first()?,
            q1: quantile_sorted(sorted, 0.25)?,
            median: quantile_sorted(sorted, 0.5)?,
            q3: quantile_sorted(sorted, 0.75)?,
            max: *sorted.last()?,
        })
    }

    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let formatter = match f.precision() {
            None => F64Formatter::new_with_range(self.min..self.max),
            Some(n) => F64Formatter::new(n),
        };
        write_summary(f, self, &formatter)
    }
}

pub(crate) fn write_summary(
    f: &mut dyn fmt::Write,
    summary: &Summary,
    formatter: &F64Formatter,
) -> fmt::Result {
    write!(
        f,
        "min={min} q1={q1} median={median} q3={q3} max={max}",
        min = Blue.paint(formatter.format(summary.min)),
        q1 = Blue.paint(formatter.format(summary.q1)),
        median = Blue.paint(formatter.format(summary.median)),
        q3 = Blue.paint(formatter.format(summary.q3)),
        max = Blue.paint(formatter.format(summary.max)),
    )
}
