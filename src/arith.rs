//! Integer arithmetic with explicit overflow and division-by-zero policies.
//!
//! The operands are `i32` and the quotient is `f32`, the same widths as the
//! `int` and `float` of the arithmetic fixture.

use std::io::Write;

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::{FixtureError, Result};

/// What to do when an integer result does not fit in `i32`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OverflowPolicy {
    /// Fail with [`FixtureError::Overflow`]
    #[default]
    Checked,
    /// Two's complement wraparound
    Wrapping,
}

/// What `divide` does when the divisor is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DivZeroPolicy {
    /// Fail with [`FixtureError::DivisionByZero`]
    #[default]
    Error,
    /// Return the floating point result (infinity, or NaN for 0 / 0)
    Ieee,
    /// Report `Error: Division by zero` and return 0
    Zero,
}

/// Binary integer operation that [`OverflowPolicy::apply`] evaluates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntOp {
    /// `lhs + rhs`
    Add,
    /// `lhs - rhs`
    Sub,
    /// `lhs * rhs`
    Mul,
}

impl IntOp {
    /// Operator character used in [`FixtureError::Overflow`]
    pub fn symbol(self) -> char {
        match self {
            IntOp::Add => '+',
            IntOp::Sub => '-',
            IntOp::Mul => '*',
        }
    }
}

impl OverflowPolicy {
    /// Apply `op` to `lhs` and `rhs` under this policy
    pub fn apply(self, op: IntOp, lhs: i32, rhs: i32) -> Result<i32> {
        match self {
            OverflowPolicy::Wrapping => Ok(match op {
                IntOp::Add => lhs.wrapping_add(rhs),
                IntOp::Sub => lhs.wrapping_sub(rhs),
                IntOp::Mul => lhs.wrapping_mul(rhs),
            }),
            OverflowPolicy::Checked => {
                let result = match op {
                    IntOp::Add => lhs.checked_add(rhs),
                    IntOp::Sub => lhs.checked_sub(rhs),
                    IntOp::Mul => lhs.checked_mul(rhs),
                };
                result.ok_or_else(|| {
                    log::debug!("checked overflow: {lhs} {} {rhs}", op.symbol());
                    FixtureError::Overflow {
                        op: op.symbol(),
                        lhs,
                        rhs,
                    }
                })
            }
        }
    }
}

/// Evaluates the fixture arithmetic under a fixed pair of policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Arith {
    pub overflow: OverflowPolicy,
    pub div_zero: DivZeroPolicy,
}

impl Arith {
    pub fn new(overflow: OverflowPolicy, div_zero: DivZeroPolicy) -> Self {
        Self { overflow, div_zero }
    }

    pub fn add(&self, a: i32, b: i32) -> Result<i32> {
        self.overflow.apply(IntOp::Add, a, b)
    }

    pub fn subtract(&self, a: i32, b: i32) -> Result<i32> {
        self.overflow.apply(IntOp::Sub, a, b)
    }

    pub fn multiply(&self, a: i32, b: i32) -> Result<i32> {
        self.overflow.apply(IntOp::Mul, a, b)
    }

    /// Floating point quotient of `a / b`. Never truncates.
    pub fn divide(&self, a: i32, b: i32) -> Result<f32> {
        if b == 0 {
            match self.div_zero {
                DivZeroPolicy::Error => {
                    return Err(FixtureError::DivisionByZero { dividend: a });
                }
                DivZeroPolicy::Zero => {
                    log::error!("Error: Division by zero");
                    return Ok(0.0);
                }
                DivZeroPolicy::Ieee => {
                    log::warn!("dividing {a} by zero, result is not finite");
                }
            }
        }
        Ok(a as f32 / b as f32)
    }

    /// Same as [`Arith::divide`], but under [`DivZeroPolicy::Zero`] a zero
    /// divisor also writes `Error: Division by zero` to `out`.
    pub fn divide_reporting<W: Write>(&self, out: &mut W, a: i32, b: i32) -> Result<f32> {
        if b == 0 && self.div_zero == DivZeroPolicy::Zero {
            writeln!(out, "Error: Division by zero")?;
        }
        self.divide(a, b)
    }
}

/// `a + b`, failing on overflow
pub fn add(a: i32, b: i32) -> Result<i32> {
    Arith::default().add(a, b)
}

/// `a - b`, failing on overflow
pub fn subtract(a: i32, b: i32) -> Result<i32> {
    Arith::default().subtract(a, b)
}

/// `a * b`, failing on overflow
pub fn multiply(a: i32, b: i32) -> Result<i32> {
    Arith::default().multiply(a, b)
}

/// `a / b` as a float, failing when `b` is zero
pub fn divide(a: i32, b: i32) -> Result<f32> {
    Arith::default().divide(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(add(10, 5).unwrap(), 15);
        assert_eq!(subtract(10, 5).unwrap(), 5);
        assert_eq!(multiply(10, 5).unwrap(), 50);
        assert_eq!(divide(10, 5).unwrap(), 2.0);
        assert_eq!(add(-10, 5).unwrap(), -5);
    }

    #[test]
    fn test_divide_does_not_truncate() {
        assert_eq!(divide(7, 2).unwrap(), 3.5);
        assert_eq!(divide(-1, 4).unwrap(), -0.25);
    }

    #[test]
    fn test_checked_overflow() {
        let err = add(i32::MAX, 1).unwrap_err();
        assert!(matches!(
            err,
            FixtureError::Overflow {
                op: '+',
                lhs: i32::MAX,
                rhs: 1
            }
        ));
        assert!(subtract(i32::MIN, 1).is_err());
        assert!(multiply(i32::MAX, 2).is_err());
        assert_eq!(
            multiply(i32::MAX, 2).unwrap_err().to_string(),
            "overflow: 2147483647 * 2 does not fit in i32"
        );
    }

    #[test]
    fn test_wrapping_overflow() {
        let arith = Arith::new(OverflowPolicy::Wrapping, DivZeroPolicy::Error);
        assert_eq!(arith.add(i32::MAX, 1).unwrap(), i32::MIN);
        assert_eq!(arith.subtract(i32::MIN, 1).unwrap(), i32::MAX);
        assert_eq!(arith.multiply(i32::MAX, 2).unwrap(), -2);
    }

    #[test]
    fn test_divide_by_zero_error() {
        let err = divide(3, 0).unwrap_err();
        assert!(matches!(err, FixtureError::DivisionByZero { dividend: 3 }));
    }

    #[test]
    fn test_divide_by_zero_ieee() {
        let arith = Arith::new(OverflowPolicy::Checked, DivZeroPolicy::Ieee);
        assert_eq!(arith.divide(1, 0).unwrap(), f32::INFINITY);
        assert_eq!(arith.divide(-1, 0).unwrap(), f32::NEG_INFINITY);
        assert!(arith.divide(0, 0).unwrap().is_nan());
    }

    #[test]
    fn test_divide_by_zero_returns_zero() {
        let arith = Arith::new(OverflowPolicy::Checked, DivZeroPolicy::Zero);
        assert_eq!(arith.divide(10, 0).unwrap(), 0.0);
        assert_eq!(arith.divide(10, 4).unwrap(), 2.5);
    }

    #[test]
    fn test_divide_reporting_writes_zero_divisor_message() {
        let arith = Arith::new(OverflowPolicy::Checked, DivZeroPolicy::Zero);
        let mut out = Vec::new();
        assert_eq!(arith.divide_reporting(&mut out, 10, 0).unwrap(), 0.0);
        assert_eq!(out, b"Error: Division by zero\n");

        let mut out = Vec::new();
        assert_eq!(arith.divide_reporting(&mut out, 10, 4).unwrap(), 2.5);
        assert!(out.is_empty());
    }

    #[test]
    fn test_divide_reporting_other_policies_write_nothing() {
        let mut out = Vec::new();
        assert!(Arith::default().divide_reporting(&mut out, 1, 0).is_err());
        let ieee = Arith::new(OverflowPolicy::Checked, DivZeroPolicy::Ieee);
        assert_eq!(ieee.divide_reporting(&mut out, 1, 0).unwrap(), f32::INFINITY);
        assert!(out.is_empty());
    }
}
