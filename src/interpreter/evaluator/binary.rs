use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator, truth},
    util::num::truncated_rem,
};

impl Evaluator<'_> {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// - `&&`, `||`: non-zero is true; the result is `1.0` or `0.0`.
    /// - Comparisons: `1.0` when the relation holds, else `0.0`.
    /// - `+`, `-`, `*`: ordinary floating-point arithmetic.
    /// - `%`: remainder of the operands' integer parts.
    /// - `/`: division; a zero divisor is an error.
    /// - `^`: `left.powf(right)`.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` by zero, or `%` by a divisor whose integer
    ///   part is zero.
    /// - `InvalidBinaryOperator` for `!` and the named functions.
    ///
    /// # Example
    /// ```
    /// use parsetree::{ast::Operator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_binary(Operator::Modulo, 7.9, 2.5).unwrap(), 1.0);
    /// assert_eq!(Evaluator::eval_binary(Operator::And, 2.0, -1.0).unwrap(), 1.0);
    /// assert_eq!(Evaluator::eval_binary(Operator::Less, 3.0, 3.0).unwrap(), 0.0);
    /// assert!(Evaluator::eval_binary(Operator::Divide, 1.0, 0.0).is_err());
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn eval_binary(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
        use Operator::{
            Add, And, Divide, Equal, Greater, GreaterEqual, Less, LessEqual, Minus, Modulo,
            Multiply, NotEqual, Or, Power,
        };

        match op {
            And => Ok(truth(left != 0.0 && right != 0.0)),
            Or => Ok(truth(left != 0.0 || right != 0.0)),

            LessEqual => Ok(truth(left <= right)),
            Less => Ok(truth(left < right)),
            GreaterEqual => Ok(truth(left >= right)),
            Greater => Ok(truth(left > right)),
            Equal => Ok(truth(left == right)),
            NotEqual => Ok(truth(left != right)),

            Add => Ok(left + right),
            Minus => Ok(left - right),
            Multiply => Ok(left * right),
            Modulo => truncated_rem(left, right),
            Divide => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(left / right)
            },
            Power => Ok(left.powf(right)),

            _ => Err(RuntimeError::InvalidBinaryOperator { op }),
        }
    }
}
