use std::io::Write;

use crate::arith::{IntOp, OverflowPolicy};
use crate::error::Result;
use crate::seq::IntSeq;

/// Write each element followed by a space, then a newline
pub fn write_array<W: Write>(out: &mut W, seq: IntSeq<'_>) -> Result<()> {
    for value in seq {
        write!(out, "{value} ")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Print the sequence to stdout
pub fn print_array(seq: IntSeq<'_>) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_array(&mut out, seq)?;
    out.flush()?;
    Ok(())
}

/// Sum of all elements. The empty sequence sums to 0.
pub fn sum_array(seq: IntSeq<'_>, policy: OverflowPolicy) -> Result<i32> {
    log::debug!("summing {} elements", seq.len());
    let mut sum = 0;
    for &value in seq {
        sum = policy.apply(IntOp::Add, sum, value)?;
    }
    Ok(sum)
}

/// Element-wise difference over the shared prefix, plus the rest of `lhs`,
/// minus the rest of `rhs`.
///
/// Without overflow this is `sum_array(lhs) - sum_array(rhs)`.
pub fn diff_array(lhs: IntSeq<'_>, rhs: IntSeq<'_>, policy: OverflowPolicy) -> Result<i32> {
    let shared = lhs.len().min(rhs.len());
    log::debug!(
        "diffing {} and {} elements, {shared} shared",
        lhs.len(),
        rhs.len()
    );
    let (lhs_head, lhs_tail) = lhs.split_at(shared);
    let (rhs_head, rhs_tail) = rhs.split_at(shared);

    let mut diff = 0;
    for (&a, &b) in lhs_head.iter().zip(rhs_head) {
        let step = policy.apply(IntOp::Sub, a, b)?;
        log::trace!("{a} - {b} = {step}");
        diff = policy.apply(IntOp::Add, diff, step)?;
    }
    for &a in lhs_tail {
        diff = policy.apply(IntOp::Add, diff, a)?;
    }
    for &b in rhs_tail {
        diff = policy.apply(IntOp::Sub, diff, b)?;
    }
    Ok(diff)
}
