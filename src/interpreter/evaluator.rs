/// The evaluator and its entry point.
///
/// Contains the recursive tree walk, the result type and the dispatch from
/// node kinds to operator semantics.
pub mod core;

/// Binary operator evaluation.
///
/// Logical, comparison and arithmetic operators on two already evaluated
/// operands.
pub mod binary;

/// Unary operator evaluation.
///
/// Negation, logical not and dispatch to the named functions.
pub mod unary;

/// The named math functions.
///
/// Implements the functions whose domain is restricted (`tan`, `log`, `ln`,
/// `sqrt`) and the table-coupled `step`.
pub mod function;
