/// The kinds of syntax fault a parse can end with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A character or name that cannot start or continue the expression.
    UnexpectedSymbol,
    /// An opening parenthesis without its closing partner.
    MismatchedParenthesis,
    /// A function name not followed by `(`.
    MissingParenthesis,
    /// The input was empty or only whitespace.
    NotAFunction,
}

impl ParseErrorKind {
    /// Returns the short description printed after the caret.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::UnexpectedSymbol => "unexpected symbol",
            Self::MismatchedParenthesis => "mis-matched parenthesis",
            Self::MissingParenthesis => "missing parenthesis",
            Self::NotAFunction => "not a function",
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A syntax fault, positioned in the original input.
///
/// Displaying the error yields the two-line diagnostic: the input itself,
/// then one `-` for every character consumed before the fault, a `^`, and the
/// description.
///
/// # Example
/// ```
/// use parsetree::{VariableTable, error::ParseErrorKind, parse};
///
/// let err = parse("(1+2", &VariableTable::new()).unwrap_err();
///
/// assert_eq!(err.kind(), ParseErrorKind::MismatchedParenthesis);
/// assert_eq!(err.to_string(), "(1+2\n----^ mis-matched parenthesis");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind:   ParseErrorKind,
    input:  String,
    offset: usize,
}

impl ParseError {
    /// Creates an error of `kind` at byte `offset` of `input`.
    ///
    /// Offsets past the end of the input are clamped to its length.
    #[must_use]
    pub fn new(kind: ParseErrorKind, input: &str, offset: usize) -> Self {
        Self { kind,
               input: input.to_owned(),
               offset: offset.min(input.len()) }
    }

    /// The fault kind.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// The input the parse was given.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Byte offset of the fault in the input.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Number of characters consumed before the fault.
    ///
    /// This is the caret's column on the second diagnostic line.
    #[must_use]
    pub fn column(&self) -> usize {
        self.input
            .get(..self.offset)
            .map_or(self.offset, |consumed| consumed.chars().count())
    }

    /// The second diagnostic line: dashes, caret and description.
    #[must_use]
    pub fn marker(&self) -> String {
        format!("{}^ {}", "-".repeat(self.column()), self.kind)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.input, self.marker())
    }
}

impl std::error::Error for ParseError {}
