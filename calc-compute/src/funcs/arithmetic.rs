//! The four basic arithmetic operations.

use crate::error::kind::DivisionByZero;

/// Builds a function that folds its operands from left to right with the given operator. These
/// functions never fail.
macro_rules! reducer {
    ($($upname:ident $op:tt; $doc:literal),* $(,)?) => {
        $(
            #[doc = $doc]
            #[derive(Debug)]
            pub struct $upname;

            impl $upname {
                pub fn eval_static(first: f64, rest: &[f64]) -> f64 {
                    rest.iter().fold(first, |acc, &n| acc $op n)
                }
            }
        )*
    };
}

reducer! {
    Add +; "Adds the operands together, `a + b + c + ...`.",
    Subtract -; "Subtracts each following operand from the first, `a - b - c - ...`.",
    Multiply *; "Multiplies the operands together, `a * b * c * ...`.",
}

/// Divides the first operand by each following operand in turn, `a / b / c / ...`.
#[derive(Debug)]
pub struct Divide;

impl Divide {
    /// Returns [`DivisionByZero`] as soon as a divisor is zero; the divisors after it are not
    /// looked at.
    pub fn eval_static(first: f64, rest: &[f64]) -> Result<f64, DivisionByZero> {
        rest.iter()
            .enumerate()
            .try_fold(first, |acc, (index, &n)| {
                if n == 0.0 {
                    Err(DivisionByZero { index })
                } else {
                    Ok(acc / n)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn add() {
        assert_eq!(Add::eval_static(20.0, &[1.0]), 21.0);
        assert_eq!(Add::eval_static(79.0, &[123191023123.0]), 123191023202.0);
        assert_eq!(Add::eval_static(0.0, &[0.0]), 0.0);
        assert_eq!(Add::eval_static(-73.0, &[99.0]), 26.0);
        assert_eq!(Add::eval_static(-1.0, &[-1.0]), -2.0);
        assert_eq!(Add::eval_static(-2222.0, &[0.0]), -2222.0);
        assert_float_relative_eq!(Add::eval_static(1.2, &[333.0]), 334.2);
    }

    #[test]
    fn add_many_small() {
        let sum = Add::eval_static(0.0000005133, &[0.00000312, 0.000664, 0.0000532, 0.00001]);
        assert_float_relative_eq!(sum, 0.0007308333);
    }

    #[test]
    fn subtract() {
        assert_eq!(Subtract::eval_static(1.0, &[1.0]), 0.0);
        assert_eq!(Subtract::eval_static(-51.0, &[-51.0]), 0.0);
        assert_eq!(Subtract::eval_static(4323.0, &[12.0, 11.0, 39.0]), 4261.0);
        assert_eq!(Subtract::eval_static(-100.0, &[-111.0]), 11.0);
        assert_eq!(Subtract::eval_static(0.0, &[6.0, 6.0, 15.0]), -27.0);
        assert_eq!(Subtract::eval_static(0.0, &[-22.0]), 22.0);
        assert_float_relative_eq!(Subtract::eval_static(11.2, &[89.8]), -78.6);
    }

    #[test]
    fn multiply() {
        assert_eq!(Multiply::eval_static(1.0, &[1.0]), 1.0);
        assert_eq!(Multiply::eval_static(3999191.0, &[1.0, 1.0, 1.0]), 3999191.0);
        assert_eq!(Multiply::eval_static(3.0, &[3.0]), 9.0);
        assert_eq!(Multiply::eval_static(-10.0, &[-10.0]), 100.0);
        assert_eq!(Multiply::eval_static(-5.0, &[-12.0, -67.0]), -4020.0);
        assert_eq!(Multiply::eval_static(12.0, &[-1.5]), -18.0);
        assert_eq!(Multiply::eval_static(43.0, &[0.0]), 0.0);
    }

    #[test]
    fn no_additional_operands() {
        assert_eq!(Add::eval_static(7.5, &[]), 7.5);
        assert_eq!(Subtract::eval_static(7.5, &[]), 7.5);
        assert_eq!(Multiply::eval_static(7.5, &[]), 7.5);
        assert_eq!(Divide::eval_static(7.5, &[]), Ok(7.5));
    }

    #[test]
    fn left_to_right() {
        let rest = [0.1, 0.2, 0.3, 1e16, -1e16];
        assert_eq!(Add::eval_static(1.0, &rest), (((((1.0 + 0.1) + 0.2) + 0.3) + 1e16) + -1e16));
        assert_eq!(Subtract::eval_static(1.0, &rest), (((((1.0 - 0.1) - 0.2) - 0.3) - 1e16) - -1e16));
        assert_eq!(Multiply::eval_static(1.0, &rest), (((((1.0 * 0.1) * 0.2) * 0.3) * 1e16) * -1e16));
    }

    #[test]
    fn divide() {
        assert_eq!(Divide::eval_static(10.0, &[1.0]), Ok(10.0));
        assert_eq!(Divide::eval_static(99.0, &[1.0, 1.0, 1.0]), Ok(99.0));
        assert_eq!(Divide::eval_static(1.0, &[2.0, 2.0, 2.0]), Ok(0.125));
        assert_eq!(Divide::eval_static(100.0, &[10000000.0]), Ok(0.00001));
        assert_float_relative_eq!(Divide::eval_static(100.0, &[0.1, 10.0]).unwrap(), 100.0);
    }

    #[test]
    fn divide_by_zero() {
        assert_eq!(Divide::eval_static(312.0, &[0.0]), Err(DivisionByZero { index: 0 }));
        assert_eq!(Divide::eval_static(0.0, &[0.0]), Err(DivisionByZero { index: 0 }));
        assert_eq!(Divide::eval_static(5.0, &[-0.0]), Err(DivisionByZero { index: 0 }));
    }

    #[test]
    fn divide_by_zero_anywhere() {
        assert_eq!(Divide::eval_static(50.0, &[1.0, 5.0, 0.0, 200.0]), Err(DivisionByZero { index: 2 }));
        assert_eq!(Divide::eval_static(50.0, &[0.0, 1.0, 0.0]), Err(DivisionByZero { index: 0 }));
        assert_eq!(Divide::eval_static(50.0, &[1.0, 2.0, 0.0]), Err(DivisionByZero { index: 2 }));
    }
}
