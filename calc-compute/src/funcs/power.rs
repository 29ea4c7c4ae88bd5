//! Functions related to powers and roots.

use crate::error::kind::NegativeInput;

/// The number of Newton's method iterations performed by [`Sqrt`].
pub const SQRT_ITERATIONS: usize = 5000;

/// The square root function, `sqrt(x)`.
///
/// The root is approximated with Newton's method (the Babylonian method), starting from `x / 2`
/// and running for exactly [`SQRT_ITERATIONS`] iterations. There is no convergence check, so the
/// same input always goes through the same operations.
#[derive(Debug)]
pub struct Sqrt;

impl Sqrt {
    pub fn eval_static(n: f64) -> Result<f64, NegativeInput> {
        if n < 0.0 {
            return Err(NegativeInput { value: n });
        }

        let (mut x, mut y) = (n / 2.0, 0.0);
        for _ in 0..SQRT_ITERATIONS {
            // only happens when `n` is zero
            if x == 0.0 {
                break;
            }
            y = 0.5 * (x + n / x);
            x = y;
        }

        Ok(y)
    }
}
