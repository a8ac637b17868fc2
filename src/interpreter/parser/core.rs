use crate::{
    ast::{Node, ParseTree},
    error::{ParseError, ParseErrorKind},
    interpreter::{parser::reporter::ErrorReporter, variables::VariableTable},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The state of one parse call.
///
/// A `Parser` owns the cursor into the input and the error latch, and borrows
/// the variable table used to resolve names. Every grammar layer is a method
/// on it, so two parses never share state.
#[derive(Debug)]
pub struct Parser<'a> {
    pub(in crate::interpreter::parser) input:     &'a str,
    pub(in crate::interpreter::parser) cursor:    usize,
    pub(in crate::interpreter::parser) variables: &'a VariableTable,
    reporter:                                     ErrorReporter,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a str, variables: &'a VariableTable) -> Self {
        Self { input,
               cursor: 0,
               variables,
               reporter: ErrorReporter::default() }
    }

    /// Parses the whole input into a tree.
    ///
    /// Leading whitespace is skipped. Input that is empty after that is
    /// rejected as [`ParseErrorKind::NotAFunction`] without running the
    /// grammar. Otherwise the expression is parsed starting from the lowest
    /// precedence layer, and any non-whitespace left over afterwards is an
    /// [`ParseErrorKind::UnexpectedSymbol`] fault.
    ///
    /// # Example
    /// ```
    /// use parsetree::interpreter::{parser::core::Parser, variables::VariableTable};
    ///
    /// let table = VariableTable::new();
    ///
    /// let tree = Parser::new("2 + 3 * 4", &table).parse().unwrap();
    /// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
    ///
    /// assert!(Parser::new("2 + 3 )", &table).parse().is_err());
    /// ```
    pub fn parse(mut self) -> ParseResult<ParseTree> {
        self.skip_whitespace();
        if self.at_end() {
            let err = self.fault(ParseErrorKind::NotAFunction);
            tracing::debug!(input = self.input, "rejected empty expression");
            return Err(err);
        }

        let root = match self.parse_complete() {
            Ok(root) => root,
            Err(err) => {
                tracing::debug!(input = self.input,
                                kind = %err.kind(),
                                column = err.column(),
                                "syntax error");
                return Err(err);
            },
        };

        tracing::debug!(input = self.input, nodes = root.len(), "parsed expression");
        Ok(ParseTree::new(root))
    }

    /// Parses an expression and requires that nothing but whitespace follows.
    fn parse_complete(&mut self) -> ParseResult<Node> {
        let root = self.parse_expression()?;

        self.skip_whitespace();
        if !self.at_end() {
            return Err(self.fault(ParseErrorKind::UnexpectedSymbol));
        }

        Ok(root)
    }

    /// Reports a fault at the cursor and returns the latched error.
    pub(in crate::interpreter::parser) fn fault(&mut self, kind: ParseErrorKind) -> ParseError {
        self.reporter.report(kind, self.input, self.cursor)
    }
}
