//! All arithmetic functions provided by the library.
//!
//! Each function is implemented as a unit `struct` with an associated `eval_static` method. The
//! variadic functions take one required operand and a slice of additional operands, which are
//! folded into the first operand from left to right.
//!
//! # Example
//!
//! ```
//! use calc_compute::funcs::{arithmetic::{Add, Divide}, power::Sqrt};
//!
//! assert_eq!(Add::eval_static(20.0, &[1.0]), 21.0);
//! assert_eq!(Divide::eval_static(1.0, &[2.0, 2.0, 2.0]).unwrap(), 0.125);
//! assert_eq!(Sqrt::eval_static(25.0).unwrap(), 5.0);
//! ```

pub mod arithmetic;
pub mod power;

pub use power::SQRT_ITERATIONS;
