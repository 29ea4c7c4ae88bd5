use calc_parser::parser::{
    expr::Expression,
    token::op::BinOpKind,
    Parser,
};
use crate::{
    error::{kind::BadExpression, Error},
    funcs::arithmetic::{Add, Divide, Multiply, Subtract},
};

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a number.
    fn eval(&self) -> Result<f64, Error>;
}

impl Eval for Expression {
    fn eval(&self) -> Result<f64, Error> {
        let (left, right) = (self.left.value, self.right.value);
        match self.op.kind {
            BinOpKind::Add => Ok(Add::eval_static(left, &[right])),
            BinOpKind::Sub => Ok(Subtract::eval_static(left, &[right])),
            BinOpKind::Mul => Ok(Multiply::eval_static(left, &[right])),
            BinOpKind::Div => Divide::eval_static(left, &[right])
                .map_err(|err| Error::new(vec![self.right.span.clone()], err)),
        }
    }
}

/// Parses and evaluates an expression made of two numbers and one operator, such as `3 - 1.2`.
///
/// Whitespace around the numbers and the operator is ignored. If the input is not such an
/// expression, the error is a [`BadExpression`] wrapping the parse error. Dividing by zero is a
/// [`DivisionByZero`](crate::error::kind::DivisionByZero) error.
///
/// ```
/// use calc_compute::{error::kind::BadExpression, evaluate};
///
/// assert_eq!(evaluate("43.75 / 3.5").unwrap(), 12.5);
///
/// let err = evaluate("8 * 3 / 9").unwrap_err();
/// assert!(err.is::<BadExpression>());
/// assert_eq!(err.to_string(), r#"bad expression "8 * 3 / 9": expression has further content"#);
/// ```
pub fn evaluate(input: &str) -> Result<f64, Error> {
    let expr = Parser::new(input)
        .try_parse_full::<Expression>()
        .map_err(|err| Error {
            spans: err.spans,
            kind: Box::new(BadExpression { input: input.to_owned(), cause: err.kind }),
        })?;
    expr.eval()
}
