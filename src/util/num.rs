use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// Values outside the `i64` range saturate at `i64::MIN` / `i64::MAX` and
/// `NaN` becomes `0`, so the conversion never fails.
///
/// ## Example
/// ```
/// use parsetree::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(7.9), 7);
/// assert_eq!(f64_to_i64_truncated(-7.9), -7);
/// assert_eq!(f64_to_i64_truncated(1e300), i64::MAX);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncated(value: f64) -> i64 {
    value.trunc() as i64
}

/// Computes `left % right` on the truncated integer parts of both operands.
///
/// ## Errors
/// Returns `RuntimeError::DivisionByZero` when the truncated divisor is zero.
///
/// ## Example
/// ```
/// use parsetree::{error::RuntimeError, util::num::truncated_rem};
///
/// assert_eq!(truncated_rem(7.9, 2.5).unwrap(), 1.0);
/// assert_eq!(truncated_rem(-7.0, 2.0).unwrap(), -1.0);
/// assert!(matches!(truncated_rem(5.0, 0.5), Err(RuntimeError::DivisionByZero)));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn truncated_rem(left: f64, right: f64) -> EvalResult<f64> {
    let left = f64_to_i64_truncated(left);
    let right = f64_to_i64_truncated(right);

    if right == 0 {
        return Err(RuntimeError::DivisionByZero);
    }

    Ok(left.wrapping_rem(right) as f64)
}
