#![doc(html_root_url = "https://docs.rs/calcex/0.1.0")]
//! Calcex parses calculator expressions such as `2 * (x - 1.5) ^ 2 % 7` into trees and
//! evaluates them against variables that live in an [`Evaluator`](Evaluator).
//!
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use calcex::{parse, Evaluator};
//! let expr = parse::<f64>("2 * (x - 1.5) ^ 2 % 7")?;
//! let mut evaluator = Evaluator::new();
//! evaluator.set_variable("x", 3.5);
//! assert_eq!(evaluator.evaluate(&expr)?, 1.0);
//! assert_eq!(expr.to_string(), "((2 * ((x - 1.5) ^ 2)) % 7)");
//! #
//! #     Ok(())
//! # }
//! ```
//!
//! # Syntax
//!
//! * Numbers are runs of digits with at most one decimal point, e.g., `3`, `0.25`, `.5`,
//!   or `5.`. There is no exponent notation.
//! * Variable names start with an ASCII letter followed by letters and digits, e.g., `x1`.
//! * Binary operators are `+`, `-`, `*`, `/`, `%`, and `^`, whereby `+` and `-` have the
//!   lowest and `^` has the highest priority. All of them are left-associative, i.e.,
//!   `2^3^2 == (2^3)^2 == 64`.
//! * `+` and `-` are also unary prefix operators. Unary operators bind tighter than any
//!   binary operator, i.e., `-2^2 == (-2)^2 == 4`.
//! * Whitespace between tokens is ignored.
//!
//! There are no functions, no implicit multiplication, and operators consist of one
//! character.
//!
//! # Errors
//!
//! Parsing and evaluation never panic on any input. They return a
//! [`CalcError`](CalcError) whose [`kind`](CalcError::kind) tells what went wrong, see
//! [`ErrorKind`](ErrorKind). For displays with little space
//! [`ErrorKind::as_str`](ErrorKind::as_str) provides short texts such as `Division by Zero`.
//!
//! # Serialization
//!
//! With the feature `serde`, expressions are serialized as the string that
//! [`print`](print) returns and deserialized by parsing.

mod data_type;
mod definitions;
mod evaluator;
mod expression;
mod operators;
mod parser;
mod printer;
mod result;
pub mod session;
mod stack;
pub mod statements;
mod util;

pub use {
    data_type::DataType,
    evaluator::{eval_expr, Evaluator, Variables},
    expression::Expr,
    operators::{make_default_operators, BinOp, OpTable, Operator, PRIO_PAREN, PRIO_UNARY},
    parser::{is_valid_name, next_operand, parse, OpToken},
    printer::print,
    result::{CalcError, CalcResult, ErrorKind},
    session::Session,
    stack::Stack,
    statements::{line_2_statement, Statement},
};

/// Parses a string and evaluates the expression without variables.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// assert_eq!(calcex::eval_str::<f64>("(2 + 3) * 4")?, 20.0);
/// #
/// #     Ok(())
/// # }
/// ```
///
/// # Errors
///
/// See [`parse`](parse) and [`eval_expr`](eval_expr), whereby any variable leads to an error
/// of kind [`UndefinedVariable`](ErrorKind::UndefinedVariable).
pub fn eval_str<T: DataType>(text: &str) -> CalcResult<T> {
    let expr = parse::<T>(text)?;
    eval_expr(&expr, &Variables::new())
}
