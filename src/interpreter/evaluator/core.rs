use crate::{
    ast::{Node, ParseTree},
    error::RuntimeError,
    interpreter::variables::VariableTable,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// `RuntimeError` that stopped the walk.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Converts a truth value to the numeric `1.0` / `0.0` the language uses.
#[must_use]
pub const fn truth(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Walks parse trees against a variable table.
///
/// The evaluator only borrows the table, so the same tree can be evaluated
/// again after variables change, and every evaluation starts without any
/// error state left over from the previous one.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    pub(in crate::interpreter::evaluator) variables: &'a VariableTable,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator reading from `variables`.
    #[must_use]
    pub const fn new(variables: &'a VariableTable) -> Self {
        Self { variables }
    }

    /// Evaluates a parse tree.
    ///
    /// # Example
    /// ```
    /// use parsetree::{
    ///     interpreter::{evaluator::core::Evaluator, variables::VariableTable},
    ///     parse,
    /// };
    ///
    /// let mut table = VariableTable::new();
    /// let tree = parse("t * 2", &table).unwrap();
    ///
    /// table.set("t", 4.0);
    /// assert_eq!(Evaluator::new(&table).evaluate(&tree).unwrap(), 8.0);
    /// ```
    pub fn evaluate(&self, tree: &ParseTree) -> EvalResult<f64> {
        self.eval(tree.root())
            .inspect(|value| tracing::trace!(value, "evaluated expression"))
            .inspect_err(|err| {
                tracing::debug!(code = err.code(), error = %err, "evaluation failed");
            })
    }

    /// Evaluates a node and returns its value.
    ///
    /// Binary nodes evaluate their left operand first. The first runtime
    /// error stops the walk and is returned as-is; nothing to the right of it
    /// is evaluated. `&&` and `||` do not short-circuit otherwise: both
    /// operands are always evaluated.
    ///
    /// # Returns
    /// The value of the subtree, or the first error raised in it.
    pub fn eval(&self, node: &Node) -> EvalResult<f64> {
        match node {
            Node::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right)
            },
            Node::Unary { op, operand } => {
                let value = self.eval(operand)?;
                self.eval_unary(*op, value)
            },
            Node::Literal(value) => Ok(*value),
            Node::Variable(index) => self.variables
                                         .value(*index)
                                         .ok_or(RuntimeError::UnknownVariable { index: *index }),
        }
    }
}
