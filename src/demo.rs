use std::io::Write;

use crate::arith::Arith;
use crate::error::Result;

/// Write the labeled arithmetic report for `x` and `y`.
///
/// Stops at the first failing operation. Lines before it are already written.
pub fn run_demo<W: Write>(out: &mut W, x: i32, y: i32, arith: &Arith) -> Result<()> {
    log::debug!("running demo with x = {x}, y = {y}, {arith:?}");
    writeln!(out, "Testing basic arithmetic operations:")?;
    writeln!(out, "x = {x}, y = {y}")?;
    writeln!(out, "Addition: {}", arith.add(x, y)?)?;
    writeln!(out, "Subtraction: {}", arith.subtract(x, y)?)?;
    writeln!(out, "Multiplication: {}", arith.multiply(x, y)?)?;
    let quotient = arith.divide_reporting(out, x, y)?;
    writeln!(out, "Division: {quotient:.2}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::{DivZeroPolicy, OverflowPolicy};
    use crate::error::FixtureError;

    fn demo(x: i32, y: i32, arith: Arith) -> (String, Result<()>) {
        let mut out = Vec::new();
        let result = run_demo(&mut out, x, y, &arith);
        (String::from_utf8(out).unwrap(), result)
    }

    #[test]
    fn test_default_operands() {
        let (output, result) = demo(10, 5, Arith::default());
        result.unwrap();
        assert_eq!(
            output,
            "Testing basic arithmetic operations:\n\
             x = 10, y = 5\n\
             Addition: 15\n\
             Subtraction: 5\n\
             Multiplication: 50\n\
             Division: 2.00\n"
        );
    }

    #[test]
    fn test_fractional_quotient() {
        let (output, result) = demo(1, 3, Arith::default());
        result.unwrap();
        assert!(output.ends_with("Division: 0.33\n"));
    }

    #[test]
    fn test_zero_divisor_stops_report() {
        let (output, result) = demo(10, 0, Arith::default());
        assert!(matches!(
            result,
            Err(FixtureError::DivisionByZero { dividend: 10 })
        ));
        assert!(output.ends_with("Multiplication: 0\n"));
        assert!(!output.contains("Division"));
    }

    #[test]
    fn test_zero_divisor_with_zero_policy() {
        let arith = Arith::new(OverflowPolicy::Checked, DivZeroPolicy::Zero);
        let (output, result) = demo(10, 0, arith);
        result.unwrap();
        assert!(output.ends_with("Multiplication: 0\nError: Division by zero\nDivision: 0.00\n"));
    }

    #[test]
    fn test_overflow_stops_report() {
        let (output, result) = demo(i32::MAX, 1, Arith::default());
        assert!(matches!(result, Err(FixtureError::Overflow { op: '+', .. })));
        assert!(!output.contains("Addition:"));
    }
}
