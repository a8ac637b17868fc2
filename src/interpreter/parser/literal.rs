use crate::{
    error::ParseErrorKind,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Scans a numeric literal at the cursor.
    ///
    /// Accepted form, with whitespace allowed between the parts:
    /// ```text
    ///     literal  := sign* digits ("." digits)? (("e" | "E") sign* exponent)?
    ///     sign     := "+" | "-"
    /// ```
    /// Each `-` in a sign run flips the sign and each `+` is ignored. The
    /// integer and fractional digits are accumulated into one mantissa and
    /// divided by a power of ten for each fractional digit; the result is
    /// `sign * mantissa * 10^exponent / divisor`. Either the integer or the
    /// fractional digits may be absent, so a lone `.` scans as zero.
    ///
    /// # Errors
    /// - `UnexpectedSymbol` when the first character after the sign run is
    ///   neither a digit nor `.`.
    /// - `UnexpectedSymbol` when an exponent marker is not followed by a
    ///   digit.
    pub(in crate::interpreter::parser) fn scan_literal(&mut self) -> ParseResult<f64> {
        let sign = self.scan_sign_run();

        self.skip_whitespace();
        if !matches!(self.current_char(), Some('0'..='9' | '.')) {
            return Err(self.fault(ParseErrorKind::UnexpectedSymbol));
        }

        let mut mantissa = 0.0;
        let mut divisor = 1.0;

        while let Some(digit) = self.current_digit() {
            mantissa = 10.0 * mantissa + digit;
            self.advance(1);
        }

        if self.current_char() == Some('.') {
            self.advance(1);
            while let Some(digit) = self.current_digit() {
                mantissa = 10.0 * mantissa + digit;
                divisor *= 10.0;
                self.advance(1);
            }
        }

        let scale = self.scan_exponent()?;

        Ok(sign * mantissa * scale / divisor)
    }

    /// Scans an optional `e`/`E` exponent and returns `10^exponent`.
    ///
    /// Returns `1.0` when no exponent marker follows.
    fn scan_exponent(&mut self) -> ParseResult<f64> {
        self.skip_whitespace();
        if !matches!(self.current_char(), Some('e' | 'E')) {
            return Ok(1.0);
        }
        self.advance(1);

        let sign = self.scan_sign_run();

        self.skip_whitespace();
        if self.current_digit().is_none() {
            return Err(self.fault(ParseErrorKind::UnexpectedSymbol));
        }

        let mut exponent = 0.0;
        while let Some(digit) = self.current_digit() {
            exponent = 10.0 * exponent + digit;
            self.advance(1);
        }

        Ok(10.0_f64.powf(sign * exponent))
    }

    /// Consumes a run of `+` and `-` signs and returns the resulting sign.
    fn scan_sign_run(&mut self) -> f64 {
        let mut sign = 1.0;
        loop {
            match self.peek_token() {
                Some((Token::Plus, width)) => self.advance(width),
                Some((Token::Minus, width)) => {
                    sign = -sign;
                    self.advance(width);
                },
                _ => return sign,
            }
        }
    }

    /// The value of the decimal digit at the cursor.
    fn current_digit(&self) -> Option<f64> {
        self.current_char()
            .and_then(|c| c.to_digit(10))
            .map(f64::from)
    }
}
