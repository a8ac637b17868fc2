use crate::ast::Operator;

#[derive(Debug, Clone, PartialEq)]
/// Represents all faults that can occur while evaluating a parse tree.
///
/// Every variant maps to a stable numeric code through [`RuntimeError::code`].
pub enum RuntimeError {
    /// A binary node carried an operator that is not a binary operator.
    InvalidBinaryOperator {
        /// The offending operator.
        op: Operator,
    },
    /// Division, or integer modulo, by zero.
    DivisionByZero,
    /// A unary node carried an operator that is neither a prefix operator nor
    /// a function.
    InvalidUnaryOperator {
        /// The offending operator.
        op: Operator,
    },
    /// `tan` evaluated too close to an odd multiple of π/2.
    TangentUndefined {
        /// The argument passed to `tan`.
        argument: f64,
    },
    /// `log` of a negative number.
    NegativeLogarithm {
        /// The argument passed to `log`.
        argument: f64,
    },
    /// `ln` of a negative number.
    NegativeNaturalLogarithm {
        /// The argument passed to `ln`.
        argument: f64,
    },
    /// `sqrt` of a negative number.
    NegativeSquareRoot {
        /// The argument passed to `sqrt`.
        argument: f64,
    },
    /// A variable node referenced a slot outside the active table.
    UnknownVariable {
        /// The referenced slot.
        index: usize,
    },
    /// There was no tree to evaluate.
    BadTree,
}

impl RuntimeError {
    /// Returns the numeric code reported to callers.
    ///
    /// A logical `!` on a binary node reports 1; any other misplaced operator
    /// on a binary node reports 3.
    ///
    /// # Example
    /// ```
    /// use parsetree::{ast::Operator, error::RuntimeError};
    ///
    /// assert_eq!(RuntimeError::DivisionByZero.code(), 2);
    /// assert_eq!(RuntimeError::InvalidBinaryOperator { op: Operator::Not }.code(), 1);
    /// assert_eq!(RuntimeError::InvalidBinaryOperator { op: Operator::Sin }.code(), 3);
    /// assert_eq!(RuntimeError::BadTree.code(), 99);
    /// ```
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::InvalidBinaryOperator { op: Operator::Not } => 1,
            Self::DivisionByZero => 2,
            Self::InvalidBinaryOperator { .. } => 3,
            Self::TangentUndefined { .. } => 4,
            Self::NegativeLogarithm { .. } => 5,
            Self::NegativeNaturalLogarithm { .. } => 6,
            Self::NegativeSquareRoot { .. } => 7,
            Self::InvalidUnaryOperator { .. } => 8,
            Self::UnknownVariable { .. } => 9,
            Self::BadTree => 99,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.code();
        match self {
            Self::InvalidBinaryOperator { op } => {
                write!(f, "Evaluation error #{code}: '{op}' is not a binary operator.")
            },
            Self::DivisionByZero => write!(f, "Evaluation error #{code}: Division by zero."),
            Self::InvalidUnaryOperator { op } => {
                write!(f, "Evaluation error #{code}: '{op}' is not a unary operator.")
            },
            Self::TangentUndefined { argument } => write!(f,
                                                          "Evaluation error #{code}: tan is undefined at {argument}."),
            Self::NegativeLogarithm { argument } => write!(f,
                                                           "Evaluation error #{code}: log of negative number {argument}."),
            Self::NegativeNaturalLogarithm { argument } => write!(f,
                                                                  "Evaluation error #{code}: ln of negative number {argument}."),
            Self::NegativeSquareRoot { argument } => write!(f,
                                                            "Evaluation error #{code}: sqrt of negative number {argument}."),
            Self::UnknownVariable { index } => {
                write!(f, "Evaluation error #{code}: Unknown variable slot {index}.")
            },
            Self::BadTree => write!(f, "Evaluation error #{code}: No parse tree to evaluate."),
        }
    }
}

impl std::error::Error for RuntimeError {}
