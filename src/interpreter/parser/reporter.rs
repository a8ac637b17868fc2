use crate::error::{ParseError, ParseErrorKind};

/// Latches the first syntax fault of a parse.
///
/// The first call to [`ErrorReporter::report`] records the fault; every later
/// call returns that same error and ignores its own arguments.
///
/// # Example
/// ```
/// use parsetree::{error::ParseErrorKind, interpreter::parser::reporter::ErrorReporter};
///
/// let mut reporter = ErrorReporter::default();
///
/// let first = reporter.report(ParseErrorKind::MissingParenthesis, "sin 1", 4);
/// let second = reporter.report(ParseErrorKind::UnexpectedSymbol, "sin 1", 5);
///
/// assert_eq!(first, second);
/// assert_eq!(second.kind(), ParseErrorKind::MissingParenthesis);
/// assert_eq!(second.marker(), "----^ missing parenthesis");
/// ```
#[derive(Debug, Default, Clone)]
pub struct ErrorReporter {
    latched: Option<ParseError>,
}

impl ErrorReporter {
    /// Records a fault at byte `offset` of `input` unless one is already
    /// latched, and returns the latched error.
    pub fn report(&mut self, kind: ParseErrorKind, input: &str, offset: usize) -> ParseError {
        self.latched
            .get_or_insert_with(|| ParseError::new(kind, input, offset))
            .clone()
    }

    /// Returns the latched error, if any.
    #[must_use]
    pub const fn latched(&self) -> Option<&ParseError> {
        self.latched.as_ref()
    }

    /// Returns `true` once a fault has been reported.
    #[must_use]
    pub const fn is_latched(&self) -> bool {
        self.latched.is_some()
    }
}
