use std::collections::BTreeMap;

use crate::{
    calcerr,
    data_type::DataType,
    expression::Expr,
    operators::{find_op, make_default_operators, OpTable, Operator},
    statements::Statement,
    CalcResult,
};

/// Values of variables by name. Iteration is in alphabetical order of the names.
pub type Variables<T> = BTreeMap<String, T>;

/// Evaluates an expression with the given variable values and returns the computed result.
/// Evaluation stops at the first error, the left operand of a binary operation is evaluated
/// before the right one.
///
/// # Errors
///
/// * [`UndefinedVariable`](crate::ErrorKind::UndefinedVariable) if a variable of the expression
///   is not in `vars`,
/// * [`DivisionByZero`](crate::ErrorKind::DivisionByZero) if the right operand of `/` or `%` is
///   zero, and
/// * [`InvalidOperator`](crate::ErrorKind::InvalidOperator) for a hand-made expression that
///   contains an operator such as `&` that does not exist.
pub fn eval_expr<T: DataType>(expr: &Expr<T>, vars: &Variables<T>) -> CalcResult<T> {
    eval_with_ops(expr, vars, &make_default_operators())
}

fn eval_with_ops<T: DataType>(
    expr: &Expr<T>,
    vars: &Variables<T>,
    ops: &[Operator<T>],
) -> CalcResult<T> {
    match expr {
        Expr::Num(x) => Ok(*x),
        Expr::Var(name) => vars
            .get(name)
            .copied()
            .ok_or_else(|| calcerr!(UndefinedVariable, "unknown variable {}", name)),
        Expr::Binary { op, left, right } => {
            let left = eval_with_ops(left, vars, ops)?;
            let right = eval_with_ops(right, vars, ops)?;
            (find_op(ops, *op)?.bin()?.apply)(left, right)
        }
        Expr::Unary { op, operand } => {
            let operand = eval_with_ops(operand, vars, ops)?;
            Ok((find_op(ops, *op)?.unary()?)(operand))
        }
    }
}

/// Tree-walking interpreter that owns the variables expressions are evaluated against.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use calcex::{parse, ErrorKind, Evaluator};
/// let expr = parse::<f64>("x + 1")?;
/// let mut evaluator = Evaluator::new();
/// assert_eq!(evaluator.evaluate(&expr).unwrap_err().kind, ErrorKind::UndefinedVariable);
/// evaluator.set_variable("x", 3.0);
/// assert_eq!(evaluator.evaluate(&expr)?, 4.0);
/// #
/// #     Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Evaluator<T = f64>
where
    T: DataType,
{
    variables: Variables<T>,
    ops: OpTable<T>,
}

impl<T: DataType> Evaluator<T> {
    pub fn new() -> Self {
        Evaluator {
            variables: Variables::new(),
            ops: make_default_operators(),
        }
    }

    /// See [`eval_expr`](eval_expr) for possible errors.
    pub fn evaluate(&self, expr: &Expr<T>) -> CalcResult<T> {
        eval_with_ops(expr, &self.variables, &self.ops)
    }

    /// Evaluates the right-hand side of the statement and, if it is an assignment, stores the
    /// result under the variable name. If the evaluation fails, the variables are unchanged.
    pub fn execute(&mut self, statement: &Statement<T>) -> CalcResult<T> {
        let value = self.evaluate(&statement.rhs)?;
        if let Some(var) = statement.var {
            self.set_variable(var, value);
        }
        Ok(value)
    }

    /// Inserts or overwrites a variable.
    pub fn set_variable(&mut self, name: &str, value: T) {
        self.variables.insert(name.to_string(), value);
    }

    pub fn remove_variable(&mut self, name: &str) -> Option<T> {
        self.variables.remove(name)
    }

    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    pub fn variable(&self, name: &str) -> Option<T> {
        self.variables.get(name).copied()
    }

    pub fn variables(&self) -> &Variables<T> {
        &self.variables
    }
}

impl<T: DataType> Default for Evaluator<T> {
    fn default() -> Self {
        Self::new()
    }
}
