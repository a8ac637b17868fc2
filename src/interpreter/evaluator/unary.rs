use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator, truth},
        function,
    },
};

impl Evaluator<'_> {
    /// Applies a prefix operator or named function to an evaluated operand.
    ///
    /// Supported operators:
    /// - `Not`: `1.0` when the operand is zero, else `0.0`.
    /// - `Minus`: negation.
    /// - `sin`, `cos`, `exp`: the standard functions.
    /// - `tan`, `log`, `ln`, `sqrt`: the standard functions with their domain
    ///   checked, see [`function`].
    /// - `step`: compares the operand with the value of the first table slot.
    ///
    /// # Errors
    /// - The domain errors raised by [`function`].
    /// - `InvalidUnaryOperator` for the binary-only operators.
    ///
    /// # Example
    /// ```
    /// use parsetree::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::core::Evaluator, variables::VariableTable},
    /// };
    ///
    /// let mut table = VariableTable::new();
    /// table.set("t", 10.0);
    /// let evaluator = Evaluator::new(&table);
    ///
    /// assert_eq!(evaluator.eval_unary(Operator::Not, 0.0).unwrap(), 1.0);
    /// assert_eq!(evaluator.eval_unary(Operator::Minus, 5.0).unwrap(), -5.0);
    /// assert_eq!(evaluator.eval_unary(Operator::Step, 3.0).unwrap(), 1.0);
    /// assert_eq!(evaluator.eval_unary(Operator::Sqrt, -4.0).unwrap_err().code(), 7);
    /// ```
    pub fn eval_unary(&self, op: Operator, value: f64) -> EvalResult<f64> {
        match op {
            Operator::Not => Ok(truth(value == 0.0)),
            Operator::Minus => Ok(-value),
            Operator::Sin => Ok(value.sin()),
            Operator::Cos => Ok(value.cos()),
            Operator::Tan => function::tan(value),
            Operator::Exp => Ok(value.exp()),
            Operator::Log => function::log10(value),
            Operator::Ln => function::ln(value),
            Operator::Sqrt => function::sqrt(value),
            Operator::Step => Ok(function::step(value, self.time())),
            _ => Err(RuntimeError::InvalidUnaryOperator { op }),
        }
    }

    /// The value of the first table slot, which `step` compares against.
    fn time(&self) -> f64 {
        self.variables.value(0).unwrap_or_default()
    }
}
