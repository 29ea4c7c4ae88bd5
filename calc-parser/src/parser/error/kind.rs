use ariadne::Fmt;
use calc_attrs::ErrorKind;
use calc_error::EXPR;
use crate::tokenizer::TokenKind;

pub use calc_error::ErrorKind;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of expression",
    labels = [format!("you might need to add another {} here", "number or operator".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression has further content",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = format!(
        "only a single operation between two numbers is supported, such as {}",
        "3 - 1.2".fg(EXPR),
    ),
)]
pub struct ExpectedEof;

/// A number was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a number",
    labels = [format!("found {:?} here", found)],
    help = format!("numbers look like {}", "12, -0.5, 1.5e3, or inf".fg(EXPR)),
)]
pub struct ExpectedNumber {
    /// The token that was found.
    pub found: TokenKind,
}

/// A number literal could not be converted to a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", lexeme),
    labels = ["here"],
)]
pub struct InvalidNumber {
    /// The lexeme of the literal.
    pub lexeme: String,
}

/// The operator symbol is not one of the supported operations.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid operation {:?}", op),
    labels = ["this operator"],
    help = format!("the supported operators are: {}", "+ - * /".fg(EXPR)),
)]
pub struct InvalidOperation {
    /// The operator symbol that was found.
    pub op: char,
}
