/// The parser state and its entry point.
///
/// Holds the per-call cursor and error latch, runs the grammar from the
/// lowest precedence layer, and rejects unconsumed trailing input.
pub mod core;

/// Whitespace-skipping token lookahead.
///
/// Tests which token comes next without consuming it; callers advance the
/// cursor explicitly after a successful match.
pub mod matcher;

/// Numeric literal scanning.
///
/// Reads an optionally signed decimal number with an optional exponent
/// directly from the input characters.
pub mod literal;

/// Binary operator layers.
///
/// Logical, comparison, additive, multiplicative and power expressions, each
/// with its own associativity.
pub mod binary;

/// Unary prefixes and primary expressions.
///
/// Prefix `+`, `-` and `!`, parenthesised expressions, function calls,
/// variables and literals.
pub mod unary;

/// Syntax fault latching.
///
/// Records the first fault of a parse and hands the same error back for any
/// later report.
pub mod reporter;
