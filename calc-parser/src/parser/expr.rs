use std::{fmt, ops::Range, str::FromStr};
use super::{
    error::Error,
    literal::LitNum,
    token::op::BinOp,
    Parse,
    Parser,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An expression made of exactly two numbers and the operator between them, such as `3 - 1.2`.
///
/// Chained expressions such as `8 * 3 / 9` are not expressions: parsing one with
/// [`Parser::try_parse_full`] fails because of the content after the second number.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expression {
    /// The left-hand side of the operation.
    pub left: LitNum,

    /// The operator.
    pub op: BinOp,

    /// The right-hand side of the operation.
    pub right: LitNum,
}

impl Expression {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        self.left.span.start..self.right.span.end
    }
}

impl Parse for Expression {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let left = input.try_parse::<LitNum>()?;
        let op = input.try_parse::<BinOp>()?;
        let right = input.try_parse::<LitNum>()?;
        Ok(Self { left, op, right })
    }
}

impl FromStr for Expression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(s).try_parse_full()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}
