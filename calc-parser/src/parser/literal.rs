use crate::tokenizer::TokenKind;
use std::{fmt, ops::Range};
use super::{
    error::{kind, Error},
    Parse,
    Parser,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number literal, with an optional sign attached to it. Integers and floating-point numbers
/// are both supported and represented here as `f64`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the number literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from, including the sign.
    pub span: Range<usize>,
}

/// Returns the value of the named number literals `inf`, `infinity`, and `nan`, ignoring case.
fn named_value(name: &str) -> Option<f64> {
    if name.eq_ignore_ascii_case("inf") || name.eq_ignore_ascii_case("infinity") {
        Some(f64::INFINITY)
    } else if name.eq_ignore_ascii_case("nan") {
        Some(f64::NAN)
    } else {
        None
    }
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let first = input.next_token()?;
        let start = first.span.start;

        // a sign must be attached directly to the digits
        let (negative, token) = if first.kind.is_sign() {
            (first.kind == TokenKind::Sub, input.next_token_raw()?)
        } else {
            (false, first)
        };

        let magnitude = match token.kind {
            TokenKind::Number => token.lexeme
                .parse::<f64>()
                .map_err(|_| Error::new(vec![token.span.clone()], kind::InvalidNumber {
                    lexeme: token.lexeme.to_owned(),
                }))?,
            TokenKind::Name => named_value(token.lexeme)
                .ok_or_else(|| Error::new(vec![token.span.clone()], kind::ExpectedNumber {
                    found: token.kind,
                }))?,
            found => return Err(Error::new(vec![token.span.clone()], kind::ExpectedNumber { found })),
        };

        Ok(Self {
            value: if negative { -magnitude } else { magnitude },
            span: start..token.span.end,
        })
    }
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
