use crate::{
    ast::Operator,
    interpreter::{
        lexer::{Token, first_token, token_to_operator},
        parser::core::Parser,
    },
};

/// Characters skipped between tokens.
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

impl<'a> Parser<'a> {
    /// Advances the cursor past any whitespace.
    pub(in crate::interpreter::parser) fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        self.cursor += rest.len() - rest.trim_start_matches(is_whitespace).len();
    }

    /// Skips whitespace, then lexes the next token without consuming it.
    ///
    /// Returns the token and its width in bytes. The cursor is left at the
    /// start of the token, so a fault reported now points at it.
    pub(in crate::interpreter::parser) fn peek_token(&mut self) -> Option<(Token, usize)> {
        self.skip_whitespace();
        first_token(self.remaining())
    }

    /// Like [`Parser::peek_token`], restricted to operator tokens.
    pub(in crate::interpreter::parser) fn peek_operator(&mut self) -> Option<(Operator, usize)> {
        let (token, width) = self.peek_token()?;
        Some((token_to_operator(&token)?, width))
    }

    /// Tests whether `expected` comes next.
    ///
    /// This is pure lookahead: on a match the token's width is returned and
    /// the caller must [`advance`](Parser::advance) past it.
    pub(in crate::interpreter::parser) fn matches(&mut self, expected: &Token) -> Option<usize> {
        match self.peek_token() {
            Some((token, width)) if token == *expected => Some(width),
            _ => None,
        }
    }

    /// Consumes the next token if it is one of the `accepted` operators.
    pub(in crate::interpreter::parser) fn accept(&mut self, accepted: &[Operator]) -> Option<Operator> {
        let (op, width) = self.peek_operator()?;
        if !accepted.contains(&op) {
            return None;
        }
        self.advance(width);
        Some(op)
    }

    /// Moves the cursor forward by `width` bytes.
    pub(in crate::interpreter::parser) fn advance(&mut self, width: usize) {
        self.cursor = (self.cursor + width).min(self.input.len());
    }

    /// The character at the cursor, without skipping whitespace.
    pub(in crate::interpreter::parser) fn current_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// The unconsumed input.
    pub(in crate::interpreter::parser) fn remaining(&self) -> &'a str {
        &self.input[self.cursor..]
    }

    /// Returns `true` once the whole input has been consumed.
    pub(in crate::interpreter::parser) fn at_end(&self) -> bool {
        self.cursor >= self.input.len()
    }
}
