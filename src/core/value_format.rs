use rust_decimal::RoundingStrategy;

use crate::core::primitives::f64_to_decimal;

/// Turns a data-space value into label text.
///
/// Implemented for plain closures so hosts can plug in locale-aware
/// formatting without a wrapper type.
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

impl<F> ValueFormatter for F
where
    F: Fn(f64) -> String + Send + Sync,
{
    fn format(&self, value: f64) -> String {
        self(value)
    }
}

/// Integral values print without a fraction, everything else in shortest form.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValueFormatter;

impl ValueFormatter for DefaultValueFormatter {
    fn format(&self, value: f64) -> String {
        // Beyond 2^53 every f64 is integral and `{}` already prints digits only.
        if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.007_199_254_740_992e15 {
            format!("{}", value as i64)
        } else {
            format!("{value}")
        }
    }
}

/// Fixed fraction digits, rounded half away from zero in decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalValueFormatter {
    pub fraction_digits: u32,
}

impl DecimalValueFormatter {
    #[must_use]
    pub fn new(fraction_digits: u32) -> Self {
        Self { fraction_digits }
    }
}

impl ValueFormatter for DecimalValueFormatter {
    fn format(&self, value: f64) -> String {
        match f64_to_decimal(value) {
            Some(decimal) => {
                let rounded = decimal.round_dp_with_strategy(
                    self.fraction_digits,
                    RoundingStrategy::MidpointAwayFromZero,
                );
                format!("{:.*}", self.fraction_digits as usize, rounded)
            }
            None => DefaultValueFormatter.format(value),
        }
    }
}
