use crate::{
    ast::{Node, Operator},
    interpreter::parser::core::{ParseResult, Parser},
};

const LOGICAL: [Operator; 2] = [Operator::And, Operator::Or];

const COMPARISON: [Operator; 6] = [Operator::LessEqual,
                                   Operator::Less,
                                   Operator::GreaterEqual,
                                   Operator::Greater,
                                   Operator::Equal,
                                   Operator::NotEqual];

const ADDITIVE: [Operator; 2] = [Operator::Add, Operator::Minus];

const PRODUCT: [Operator; 2] = [Operator::Multiply, Operator::Modulo];

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// This is the entry point of the grammar. It starts at the lowest
    /// precedence layer, the logical operators, and recursively descends
    /// through the others.
    ///
    /// Grammar: `expression := logical`
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Node> {
        self.parse_logical()
    }

    /// Parses `&&` and `||`.
    ///
    /// Both share one precedence level and group to the right:
    /// `a && b || c` parses as `a && (b || c)`.
    ///
    /// Grammar: `logical := comparison (("&&" | "||") logical)?`
    fn parse_logical(&mut self) -> ParseResult<Node> {
        let left = self.parse_comparison()?;

        match self.accept(&LOGICAL) {
            Some(op) => {
                let right = self.parse_logical()?;
                Ok(Node::binary(op, left, right))
            },
            None => Ok(left),
        }
    }

    /// Parses the six comparison operators, grouping to the right.
    ///
    /// Grammar: `comparison := additive (("<=" | "<" | ">=" | ">" | "==" |
    /// "!=") comparison)?`
    fn parse_comparison(&mut self) -> ParseResult<Node> {
        let left = self.parse_additive()?;

        match self.accept(&COMPARISON) {
            Some(op) => {
                let right = self.parse_comparison()?;
                Ok(Node::binary(op, left, right))
            },
            None => Ok(left),
        }
    }

    /// Parses addition and subtraction.
    ///
    /// These group to the right, so `2 - 3 - 1` parses as `2 - (3 - 1)` and
    /// evaluates to `0`.
    ///
    /// Grammar: `additive := multiplicative (("+" | "-") additive)?`
    fn parse_additive(&mut self) -> ParseResult<Node> {
        let left = self.parse_multiplicative()?;

        match self.accept(&ADDITIVE) {
            Some(op) => {
                let right = self.parse_additive()?;
                Ok(Node::binary(op, left, right))
            },
            None => Ok(left),
        }
    }

    /// Parses multiplication, modulo and division.
    ///
    /// `*` and `%` group to the right. A run of divisions is folded to the
    /// left instead, so `8 / 2 / 2` parses as `(8 / 2) / 2`; a `*` or `%`
    /// after the run takes the folded quotient as its left operand.
    ///
    /// Grammar:
    /// ```text
    ///     multiplicative := power ( ("*" | "%") multiplicative
    ///                             | ("/" power)+ (("*" | "%") multiplicative)? )?
    /// ```
    fn parse_multiplicative(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_power()?;

        while self.accept(&[Operator::Divide]).is_some() {
            let right = self.parse_power()?;
            left = Node::binary(Operator::Divide, left, right);
        }

        match self.accept(&PRODUCT) {
            Some(op) => {
                let right = self.parse_multiplicative()?;
                Ok(Node::binary(op, left, right))
            },
            None => Ok(left),
        }
    }

    /// Parses exponentiation, grouping to the right.
    ///
    /// The operands are unary expressions, so prefixes bind tighter than `^`:
    /// `-2 ^ 2` is `(-2) ^ 2`.
    ///
    /// Grammar: `power := unary ("^" power)?`
    fn parse_power(&mut self) -> ParseResult<Node> {
        let base = self.parse_unary()?;

        match self.accept(&[Operator::Power]) {
            Some(op) => {
                let exponent = self.parse_power()?;
                Ok(Node::binary(op, base, exponent))
            },
            None => Ok(base),
        }
    }
}
