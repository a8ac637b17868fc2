/// Syntax errors.
///
/// Defines the fault raised while parsing an expression string: the fault
/// kind, where in the input it happened, and the two-line caret diagnostic
/// shown to the user.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the faults raised while evaluating a parse tree, such as division
/// by zero or a logarithm of a negative number. Each fault carries a stable
/// numeric code.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseErrorKind};
pub use runtime_error::RuntimeError;
