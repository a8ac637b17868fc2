use crate::{
    ast::{Node, Operator},
    error::ParseErrorKind,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Supports the prefix operators:
    /// - `+`  (no-op, builds no node)
    /// - `-`  (negation)
    /// - `!`  (logical not)
    ///
    /// Prefixes chain and are right-associative, so `!-x` is `!(-x)` and
    /// `--5` is `-(-5)`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("+" | "-" | "!") unary
    ///            | primary
    /// ```
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> ParseResult<Node> {
        match self.peek_operator() {
            Some((Operator::Add, width)) => {
                self.advance(width);
                self.parse_unary()
            },
            Some((op @ (Operator::Minus | Operator::Not), width)) => {
                self.advance(width);
                let operand = self.parse_unary()?;
                Ok(Node::unary(op, operand))
            },
            _ => self.parse_primary(),
        }
    }

    /// Parses a primary expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := "(" expression ")"
    ///              | function "(" expression ")"
    ///              | variable
    ///              | literal
    /// ```
    /// Anything that is neither a parenthesis nor a name is handed to the
    /// literal scanner, which reports the fault when it is not a number.
    fn parse_primary(&mut self) -> ParseResult<Node> {
        match self.peek_token() {
            Some((Token::LParen, width)) => {
                self.advance(width);
                self.parse_grouping()
            },
            Some((Token::Identifier(name), width)) => self.parse_name(&name, width),
            _ => Ok(Node::Literal(self.scan_literal()?)),
        }
    }

    /// Parses the rest of `( expression )` after the opening parenthesis.
    ///
    /// The inner expression is returned as-is, with no wrapper node.
    fn parse_grouping(&mut self) -> ParseResult<Node> {
        let inner = self.parse_expression()?;
        self.expect_closing_paren()?;
        Ok(inner)
    }

    /// Resolves a name at the cursor.
    ///
    /// Function names take precedence over variables. A function must be
    /// followed by a parenthesised argument; a variable becomes a reference to
    /// its table slot.
    ///
    /// # Errors
    /// - `MissingParenthesis` when a function name is not followed by `(`.
    /// - `MismatchedParenthesis` when the argument is not closed.
    /// - `UnexpectedSymbol` when the name is neither a function nor a
    ///   variable.
    fn parse_name(&mut self, name: &str, width: usize) -> ParseResult<Node> {
        if let Some(function) = Operator::function_named(name) {
            self.advance(width);

            let Some(paren) = self.matches(&Token::LParen) else {
                return Err(self.fault(ParseErrorKind::MissingParenthesis));
            };
            self.advance(paren);

            let argument = self.parse_grouping()?;
            return Ok(Node::unary(function, argument));
        }

        match self.variables.lookup(name) {
            Some(index) => {
                self.advance(width);
                Ok(Node::Variable(index))
            },
            None => Err(self.fault(ParseErrorKind::UnexpectedSymbol)),
        }
    }

    /// Consumes a `)` or reports a mismatched parenthesis.
    fn expect_closing_paren(&mut self) -> ParseResult<()> {
        match self.matches(&Token::RParen) {
            Some(width) => {
                self.advance(width);
                Ok(())
            },
            None => Err(self.fault(ParseErrorKind::MismatchedParenthesis)),
        }
    }
}
