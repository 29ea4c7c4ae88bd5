//! Arithmetic functions, a Newton's method square root, and evaluation of expressions of the form
//! `<number> <operator> <number>`.
//!
//! Every operation is a pure function of its arguments. Failures are returned as errors:
//!
//! - [`Divide`] returns [`DivisionByZero`] when a divisor is zero,
//! - [`Sqrt`] returns [`NegativeInput`] when its input is negative,
//! - [`evaluate`] returns an [`Error`] whose kind is [`BadExpression`] when its input cannot be
//!   parsed, or [`DivisionByZero`] when the expression divides by zero.
//!
//! [`Error`]s keep track of the regions of the input they point at, and can be turned into an
//! [`ariadne::Report`] with [`Error::build_report`].

pub mod error;
pub mod eval;
pub mod funcs;

pub use error::{kind::{BadExpression, DivisionByZero, NegativeInput}, Error};
pub use eval::{evaluate, Eval};
pub use funcs::{
    arithmetic::{Add, Divide, Multiply, Subtract},
    power::Sqrt,
};

#[cfg(test)]
mod tests {
    use ariadne::Source;
    use super::*;

    /// Renders the report of the error produced by evaluating the given input, without colors.
    fn render(input: &str) -> String {
        let err = evaluate(input).unwrap_err();
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(input)), &mut buf)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn report_division_by_zero() {
        let report = render("1 / 0");
        assert!(report.contains("division by zero"));
        assert!(report.contains("this divisor is zero"));
    }

    #[test]
    fn report_further_content() {
        let report = render("8 * 3 / 9");
        assert!(report.contains(r#"bad expression "8 * 3 / 9": expression has further content"#));
        assert!(report.contains("I could not understand the remaining expression here"));
    }

    #[test]
    fn report_invalid_operation() {
        let report = render("2 % 5");
        assert!(report.contains("this operator"));
        assert!(report.contains("the supported operators are: + - * /"));
    }

    #[test]
    fn errors_are_send() {
        fn assert_send<T: Send>(_: T) {}
        assert_send(evaluate("1 / 0").unwrap_err());
        assert_send(Divide::eval_static(1.0, &[0.0]).unwrap_err());
    }
}
