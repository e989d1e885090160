//! Percentages of one amount against a total
//!
//! A ratio against a zero total has no value; it is carried as
//! [`Percentage::Undefined`] and displayed as `-` instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// How a ratio is turned into a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PercentageRounding {
    /// Round the ratio to two decimals, then scale by 100
    #[default]
    TwoStep,
    /// Scale the exact ratio by 100
    Direct,
}

/// A percentage value, or the sentinel for a zero denominator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Percentage {
    Value(f64),
    Undefined,
}

impl Percentage {
    /// Percentage of `part` against `whole`
    ///
    /// # Examples
    /// ```
    /// use budget_tracker::models::{Money, Percentage, PercentageRounding};
    /// let p = Percentage::of(Money::from_dollars(40), Money::from_dollars(50), PercentageRounding::TwoStep);
    /// assert_eq!(p.to_string(), "80%");
    /// let none = Percentage::of(Money::from_dollars(40), Money::zero(), PercentageRounding::TwoStep);
    /// assert_eq!(none.to_string(), "-");
    /// ```
    pub fn of(part: Money, whole: Money, rounding: PercentageRounding) -> Self {
        if whole.is_zero() {
            return Self::Undefined;
        }

        let ratio = part.as_f64() / whole.as_f64();
        let value = match rounding {
            PercentageRounding::TwoStep => round2(ratio) * 100.0,
            PercentageRounding::Direct => ratio * 100.0,
        };
        Self::Value(value)
    }

    /// The numeric value, if defined
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Undefined => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

/// Round half away from zero to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{:.0}%", v),
            Self::Undefined => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(p: Percentage, expected: f64) {
        let v = p.value().expect("percentage should be defined");
        assert!((v - expected).abs() < 1e-9, "{} != {}", v, expected);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.3333), 0.33);
        assert_eq!(round2(0.666), 0.67);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(2.0), 2.0);
    }

    #[test]
    fn test_two_step_truncates_before_scaling() {
        let p = Percentage::of(
            Money::from_dollars(100),
            Money::from_dollars(300),
            PercentageRounding::TwoStep,
        );
        approx(p, 33.0);
        assert_eq!(p.to_string(), "33%");
    }

    #[test]
    fn test_direct_keeps_precision() {
        let p = Percentage::of(
            Money::from_dollars(100),
            Money::from_dollars(300),
            PercentageRounding::Direct,
        );
        approx(p, 100.0 / 3.0);
        assert_eq!(p.to_string(), "33%");
    }

    #[test]
    fn test_modes_can_disagree() {
        // 0.1666 rounds to 0.17 first, so two-step lands on 17 while direct is 16.67
        let two_step = Percentage::of(
            Money::from_dollars(1),
            Money::from_dollars(6),
            PercentageRounding::TwoStep,
        );
        let direct = Percentage::of(
            Money::from_dollars(1),
            Money::from_dollars(6),
            PercentageRounding::Direct,
        );
        approx(two_step, 17.0);
        assert_eq!(direct.to_string(), "17%");
        assert!(direct.value().unwrap() < 17.0);
    }

    #[test]
    fn test_zero_whole_is_undefined() {
        let p = Percentage::of(Money::from_dollars(5), Money::zero(), PercentageRounding::TwoStep);
        assert!(p.is_undefined());
        assert_eq!(p.to_string(), "-");
        assert_eq!(p.value(), None);
    }

    #[test]
    fn test_part_larger_than_whole() {
        let p = Percentage::of(
            Money::from_dollars(100),
            Money::from_dollars(50),
            PercentageRounding::TwoStep,
        );
        approx(p, 200.0);
    }

    #[test]
    fn test_rounding_serde_names() {
        let json = serde_json::to_string(&PercentageRounding::TwoStep).unwrap();
        assert_eq!(json, "\"two_step\"");
        let direct: PercentageRounding = serde_json::from_str("\"direct\"").unwrap();
        assert_eq!(direct, PercentageRounding::Direct);
    }
}
