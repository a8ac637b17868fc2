use logos::Logos;

use crate::ast::Operator;

/// Represents a lexical token of an expression.
///
/// The parser never tokenizes the whole input up front. It lexes one token at
/// a time at the current cursor, so the literal scanner can take over on the
/// characters that start a number.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `%`
    #[token("%")]
    Percent,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Function or variable names, such as `sin` or `pi`. Names start with a
    /// lowercase letter.
    #[regex(r"[a-z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// The first character of a numeric literal. The literal itself is read
    /// by the literal scanner.
    #[regex(r"[0-9.]")]
    NumberStart,
}

/// Lexes the first token of `source`.
///
/// Returns the token together with the byte offset just past it, measured
/// from the start of `source`. Returns `None` when `source` holds only
/// whitespace or starts with a character no token accepts.
///
/// # Example
/// ```
/// use parsetree::interpreter::lexer::{Token, first_token};
///
/// assert_eq!(first_token("<= 3"), Some((Token::LessEqual, 2)));
/// assert_eq!(first_token("  sin(x)"), Some((Token::Identifier("sin".to_string()), 5)));
/// assert_eq!(first_token("= 3"), None);
/// ```
#[must_use]
pub fn first_token(source: &str) -> Option<(Token, usize)> {
    let mut lexer = Token::lexer(source);
    match lexer.next() {
        Some(Ok(token)) => Some((token, lexer.span().end)),
        _ => None,
    }
}

/// Maps a token to the binary operator it spells, if any.
///
/// `-` maps to [`Operator::Minus`], which the grammar also uses for negation,
/// and `!` maps to [`Operator::Not`].
///
/// # Example
/// ```
/// use parsetree::{
///     ast::Operator,
///     interpreter::lexer::{Token, token_to_operator},
/// };
///
/// assert_eq!(token_to_operator(&Token::Slash), Some(Operator::Divide));
/// assert_eq!(token_to_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::AndAnd => Some(Operator::And),
        Token::OrOr => Some(Operator::Or),
        Token::LessEqual => Some(Operator::LessEqual),
        Token::Less => Some(Operator::Less),
        Token::GreaterEqual => Some(Operator::GreaterEqual),
        Token::Greater => Some(Operator::Greater),
        Token::EqualEqual => Some(Operator::Equal),
        Token::BangEqual => Some(Operator::NotEqual),
        Token::Bang => Some(Operator::Not),
        Token::Plus => Some(Operator::Add),
        Token::Minus => Some(Operator::Minus),
        Token::Star => Some(Operator::Multiply),
        Token::Percent => Some(Operator::Modulo),
        Token::Slash => Some(Operator::Divide),
        Token::Caret => Some(Operator::Power),
        _ => None,
    }
}
