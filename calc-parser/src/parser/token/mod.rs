//! Structs to help parse the tokens that make up an expression, other than number literals.

pub mod op;
