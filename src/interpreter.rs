/// The context module pairs a variable table with parsing and evaluation.
///
/// A `Context` is the convenient entry point for callers that keep one set of
/// variables around and parse or evaluate several expressions against it.
pub mod context;
/// The evaluator module computes the value of parse trees.
///
/// The evaluator walks a tree depth-first, left operand before right,
/// applies the arithmetic, logical and comparison operators and the named
/// functions, and reads variables from the table at evaluation time.
///
/// # Responsibilities
/// - Evaluates every node kind of the parse tree.
/// - Checks function domains and divisors.
/// - Reports runtime errors with their numeric codes.
pub mod evaluator;
/// The lexer module recognises the tokens of the expression language.
///
/// Operators, parentheses and names are lexed with `logos`. Numbers are only
/// detected here; the parser scans them itself because a literal may contain
/// whitespace and a sign run.
pub mod lexer;
/// The parser module builds parse trees from expression text.
///
/// The parser is a recursive-descent parser with one function per
/// precedence layer. It resolves names against the variable table while
/// parsing and reports the first syntax error with its position.
pub mod parser;
/// The variables module holds the fixed table of named variables.
pub mod variables;
