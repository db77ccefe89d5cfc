use crate::{calcerr, data_type::DataType, parser, CalcResult, Expr};

/// A line of calculator input. Either an assignment `x = 2 * y` with `var == Some("x")` or a
/// bare expression with `var == None`.
#[derive(Clone, PartialEq, Debug)]
pub struct Statement<'a, T = f64> {
    pub var: Option<&'a str>,
    pub rhs: Expr<T>,
}

/// Splits a line at `=` and parses the right-hand side. The right-hand side is not evaluated,
/// see [`Evaluator::execute`](crate::Evaluator::execute).
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use calcex::{statements::line_2_statement, Evaluator};
/// let mut evaluator = Evaluator::<f64>::new();
/// evaluator.execute(&line_2_statement("r = 2")?)?;
/// let area = evaluator.execute(&line_2_statement("3 * r^2")?)?;
/// assert_eq!(area, 12.0);
/// #
/// #     Ok(())
/// # }
/// ```
///
/// # Errors
///
/// An error of kind [`InvalidExpression`](crate::ErrorKind::InvalidExpression) is returned if
/// the line contains more than one `=` or if the left-hand side is not a variable name.
/// Errors of [`parse`](crate::parse) are passed through.
pub fn line_2_statement<T: DataType>(line_str: &str) -> CalcResult<Statement<T>> {
    let mut splitted = line_str.split('=');
    let first = splitted.next();
    let second = splitted.next();
    if splitted.next().is_some() {
        return Err(calcerr!(InvalidExpression, "more than one '=' in {}", line_str));
    }
    match (first, second) {
        (Some(expr_str), None) => Ok(Statement {
            var: None,
            rhs: parser::parse(expr_str)?,
        }),
        (Some(var), Some(expr_str)) => {
            let var = var.trim();
            if !parser::is_valid_name(var) {
                return Err(calcerr!(InvalidExpression, "cannot assign to '{}'", var));
            }
            Ok(Statement {
                var: Some(var),
                rhs: parser::parse(expr_str)?,
            })
        }
        _ => Err(calcerr!(InvalidExpression, "could not split {}", line_str)),
    }
}
