use ariadne::Fmt;
use calc_attrs::ErrorKind;
use calc_error::{ErrorKind, EXPR};
use std::{any::Any, fmt};

/// A divisor was zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this divisor is zero"],
    help = format!("dividing by {} is undefined", "0".fg(EXPR)),
)]
pub struct DivisionByZero {
    /// The position of the zero divisor among the divisors, starting at 0 for the first divisor.
    pub index: usize,
}

/// The square root of a negative number was requested.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "square root of a negative number",
    labels = ["this number is negative"],
    help = format!("the square root is only defined for {}", "numbers >= 0".fg(EXPR)),
)]
pub struct NegativeInput {
    /// The negative number.
    pub value: f64,
}

/// The input could not be parsed as an expression of two numbers and one operator.
///
/// The labels and help of the report are those of the parse error that caused it.
#[derive(Debug)]
pub struct BadExpression {
    /// The input that was given.
    pub input: String,

    /// The parse error.
    pub cause: Box<dyn ErrorKind>,
}

impl BadExpression {
    /// Returns the parse error if it is of type `K`.
    pub fn cause<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.cause.as_any().downcast_ref::<K>()
    }
}

impl ErrorKind for BadExpression {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn message(&self) -> String {
        format!("bad expression {:?}: {}", self.input, self.cause.message())
    }

    fn labels(&self) -> Vec<String> {
        self.cause.labels()
    }

    fn help(&self) -> Option<String> {
        self.cause.help()
    }
}

impl fmt::Display for BadExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for BadExpression {}
