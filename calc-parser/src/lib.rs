//! Tokenizer and parser for calculator expressions of the form `<number> <operator> <number>`.
//!
//! ```
//! use calc_parser::parser::{expr::Expression, token::op::BinOpKind, Parser};
//!
//! let expr = Parser::new("43.75 / 3.5").try_parse_full::<Expression>().unwrap();
//! assert_eq!(expr.left.value, 43.75);
//! assert_eq!(expr.op.kind, BinOpKind::Div);
//! assert_eq!(expr.right.value, 3.5);
//! ```

pub mod parser;
pub mod tokenizer;
