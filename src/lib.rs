//! # parsetree
//!
//! parsetree parses arithmetic and logical expressions into trees that can be
//! evaluated any number of times. Variables are resolved to table slots while
//! parsing and read at evaluation time, so changing a variable and evaluating
//! the same tree again needs no re-parse.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        parser::core::Parser,
    },
};

/// Defines the parse tree.
///
/// This module declares the operator catalog, the `Node` enum and the
/// `ParseTree` wrapper built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Assigns every operator its stable numeric id and symbol.
/// - Defines the four node kinds: binary, unary, literal and variable.
/// - Renders trees in a fully parenthesised form for inspection.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Syntax errors carry the input and the fault position and render as a
/// caret diagnostic. Runtime errors carry a stable numeric code.
pub mod error;
/// Ties the lexer, parser, evaluator and variable table together.
///
/// # Responsibilities
/// - Lexes and parses expression text into parse trees.
/// - Evaluates parse trees against a variable table.
/// - Exposes a `Context` that owns a table for repeated use.
pub mod interpreter;
/// General numeric helpers.
pub mod util;

pub use crate::{
    ast::{Node, Operator, ParseTree},
    interpreter::{context::Context, variables::VariableTable},
};

/// Parses `input` into a parse tree.
///
/// Names are resolved against `variables`: functions first, then variables.
/// The tree keeps slot indices only, so it does not borrow the table.
///
/// # Errors
/// Returns the first syntax error found. Its `Display` form is the input
/// followed by a caret line pointing at the fault.
///
/// # Examples
/// ```
/// use parsetree::{VariableTable, parse};
///
/// let table = VariableTable::new();
///
/// let tree = parse("2 + 3 * 4", &table).unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
///
/// let err = parse("(1+2", &table).unwrap_err();
/// assert_eq!(err.to_string(), "(1+2\n----^ mis-matched parenthesis");
/// ```
pub fn parse(input: &str, variables: &VariableTable) -> Result<ParseTree, ParseError> {
    Parser::new(input, variables).parse()
}

/// Evaluates a parse tree against `variables`.
///
/// A missing tree, such as the result of a failed parse passed along with
/// `.ok()`, is reported as `RuntimeError::BadTree`.
///
/// # Examples
/// ```
/// use parsetree::{VariableTable, evaluate, parse};
///
/// let mut table = VariableTable::new();
/// let tree = parse("sin(t)^2 + cos(t)^2", &table).ok();
///
/// table.set("t", 0.7);
/// let value = evaluate(tree.as_ref(), &table).unwrap();
/// assert!((value - 1.0).abs() < 1e-12);
///
/// assert_eq!(evaluate(None, &table).unwrap_err().code(), 99);
/// ```
pub fn evaluate(tree: Option<&ParseTree>, variables: &VariableTable) -> EvalResult<f64> {
    let tree = tree.ok_or(RuntimeError::BadTree)?;
    Evaluator::new(variables).evaluate(tree)
}

/// Parses and evaluates `source` in `context` in one step.
///
/// # Errors
/// Returns the syntax error or runtime error that stopped the computation.
///
/// # Examples
/// ```
/// use parsetree::{Context, get_result};
///
/// let context = Context::new();
///
/// assert_eq!(get_result(&context, "2 - 3 - 1").unwrap(), 0.0);
/// assert!(get_result(&context, "ln(-1)").is_err());
/// assert!(get_result(&context, "1 +").is_err());
/// ```
pub fn get_result(context: &Context, source: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let tree = context.parse(source)?;
    Ok(context.evaluate(&tree)?)
}
