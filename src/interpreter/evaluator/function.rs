use std::f64::consts::{FRAC_PI_2, PI};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// How close to an odd multiple of π/2 an argument may get before `tan`
/// refuses it.
pub const TANGENT_EPSILON: f64 = 5e-16;

/// Computes the tangent of `x`.
///
/// # Errors
/// Returns `TangentUndefined` when `x` lies within [`TANGENT_EPSILON`] of
/// π/2 modulo π, where the result would be a huge, meaningless number.
///
/// # Example
/// ```
/// use std::f64::consts::FRAC_PI_2;
///
/// use parsetree::interpreter::evaluator::function::tan;
///
/// assert_eq!(tan(0.0).unwrap(), 0.0);
/// assert_eq!(tan(FRAC_PI_2).unwrap_err().code(), 4);
/// ```
pub fn tan(x: f64) -> EvalResult<f64> {
    if (x.rem_euclid(PI) - FRAC_PI_2).abs() < TANGENT_EPSILON {
        return Err(RuntimeError::TangentUndefined { argument: x });
    }
    Ok(x.tan())
}

/// Computes the base-10 logarithm of `x`.
///
/// Zero is accepted and yields negative infinity.
///
/// # Errors
/// Returns `NegativeLogarithm` for negative `x`.
pub fn log10(x: f64) -> EvalResult<f64> {
    if x < 0.0 {
        return Err(RuntimeError::NegativeLogarithm { argument: x });
    }
    Ok(x.log10())
}

/// Computes the natural logarithm of `x`.
///
/// # Errors
/// Returns `NegativeNaturalLogarithm` for negative `x`.
pub fn ln(x: f64) -> EvalResult<f64> {
    if x < 0.0 {
        return Err(RuntimeError::NegativeNaturalLogarithm { argument: x });
    }
    Ok(x.ln())
}

/// Computes the square root of `x`.
///
/// # Errors
/// Returns `NegativeSquareRoot` for negative `x`.
///
/// # Example
/// ```
/// use parsetree::interpreter::evaluator::function::sqrt;
///
/// assert_eq!(sqrt(9.0).unwrap(), 3.0);
/// assert!(sqrt(-1.0).is_err());
/// ```
pub fn sqrt(x: f64) -> EvalResult<f64> {
    if x < 0.0 {
        return Err(RuntimeError::NegativeSquareRoot { argument: x });
    }
    Ok(x.sqrt())
}

/// The threshold function: `1.0` while `x` is below `threshold`, else `0.0`.
///
/// The evaluator passes the current value of the first table slot, the time
/// variable `t` in the default table, as the threshold.
#[must_use]
pub fn step(x: f64, threshold: f64) -> f64 {
    if x < threshold { 1.0 } else { 0.0 }
}
