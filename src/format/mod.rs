use std::ops::Range;

// Units-based suffixes for human formatting.
const UNITS: &[&str] = &["", " K", " M", " G", " T", " P"];

#[derive(Debug, Clone)]
pub struct F64Formatter {
    /// Decimals digits to be used
    decimals: usize,
    /// Number of times the value will be divided by 1000
    divisor: u8,
}

impl F64Formatter {
    /// Formatter printing numbers as is, with `decimals` decimal digits.
    pub fn new(decimals: usize) -> F64Formatter {
        F64Formatter {
            decimals,
            divisor: 0,
        }
    }

    /// Formatter for numbers in `range`, with units and decimals chosen so
    /// that values spread over the range stay distinguishable.
    pub fn new_with_range(range: Range<f64>) -> F64Formatter {
        let difference = range.end - range.start;
        if difference == 0.0 || !difference.is_finite() {
            return F64Formatter::new(3);
        }
        let log = difference.abs().log10() as i64;
        if log <= 0 {
            F64Formatter::new((-log as usize).min(8) + 3)
        } else {
            F64Formatter {
                decimals: log.rem_euclid(3) as usize,
                divisor: ((log - 1) / 3).min(UNITS.len() as i64 - 1) as u8,
            }
        }
    }

    pub fn format(&self, number: f64) -> String {
        format!(
            "{:.*}{}",
            self.decimals,
            number / 1000_f64.powi(self.divisor.into()),
            UNITS[self.divisor as usize]
        )
    }
}
