use crate::{
    calcerr,
    data_type::DataType,
    definitions::MAX_TREE_DEPTH,
    expression::Expr,
    operators::{find_op, make_default_operators, Operator, PRIO_PAREN, PRIO_UNARY},
    stack::Stack,
    CalcResult,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_NUM: Regex = Regex::new(r"^[0-9.]+").unwrap();
    static ref RE_NAME: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9]*").unwrap();
    static ref RE_NAME_EXACT: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9]*$").unwrap();
}

/// Returns the maximal run of digits and dots at the beginning of `text`. Whether the run
/// is a valid number is decided later.
pub fn is_numeric_text(text: &str) -> Option<&str> {
    RE_NUM.find(text).map(|m| m.as_str())
}

/// Returns the maximal run of letters and digits at the beginning of `text` if it starts
/// with a letter.
pub fn is_name_text(text: &str) -> Option<&str> {
    RE_NAME.find(text).map(|m| m.as_str())
}

/// Whether `text` as a whole is a valid variable name.
pub fn is_valid_name(text: &str) -> bool {
    RE_NAME_EXACT.is_match(text)
}

/// Entry of the operator stack. An opening parenthesis is kept as sentinel with
/// `repr == '('` that bounds priority comparisons.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct OpToken {
    pub repr: char,
    pub is_unary: bool,
}

impl OpToken {
    fn paren() -> Self {
        OpToken {
            repr: '(',
            is_unary: false,
        }
    }
    fn is_paren(&self) -> bool {
        self.repr == '('
    }
}

/// Reads the operand that starts at byte position `cursor`, skipping leading whitespace,
/// and moves `cursor` behind it. An operand is a number like `3.14` or a variable name
/// like `x1`.
///
/// # Errors
///
/// An error of kind [`InvalidExpression`](crate::ErrorKind::InvalidExpression) is returned if
///
/// * the end of the text is reached before an operand starts,
/// * a run of digits and dots is not a number, e.g., `3.14.15` or `.`,
/// * a number does not fit into `T`, e.g., 400 nines or `0.` followed by 400 zeros and a `1`,
/// * `cursor` is behind the end of `text` or not at a character boundary, or
/// * the operand starts with any other character.
pub fn next_operand<T: DataType>(text: &str, cursor: &mut usize) -> CalcResult<Expr<T>> {
    let rest = text.get(*cursor..).ok_or_else(|| {
        calcerr!(
            InvalidExpression,
            "position {} is not a character boundary of {}",
            cursor,
            text
        )
    })?;
    let trimmed = rest.trim_start();
    *cursor += rest.len() - trimmed.len();
    if trimmed.is_empty() {
        return Err(calcerr!(InvalidExpression, "expected operand at end of input"));
    }
    if let Some(num_str) = is_numeric_text(trimmed) {
        let x = num_str
            .parse::<T>()
            .map_err(|_| calcerr!(InvalidExpression, "cannot parse number {}", num_str))?;
        let underflow = x == T::zero() && num_str.chars().any(|c| ('1'..='9').contains(&c));
        if !x.is_finite() || underflow {
            return Err(calcerr!(InvalidExpression, "number {} out of range", num_str));
        }
        *cursor += num_str.len();
        Ok(Expr::Num(x))
    } else if let Some(name) = is_name_text(trimmed) {
        *cursor += name.len();
        Ok(Expr::var(name))
    } else {
        Err(calcerr!(
            InvalidExpression,
            "how to parse the beginning of {}",
            trimmed
        ))
    }
}

fn prio<T: Copy>(op: &OpToken, ops: &[Operator<T>]) -> CalcResult<i32> {
    if op.is_paren() {
        Ok(PRIO_PAREN)
    } else if op.is_unary {
        Ok(PRIO_UNARY)
    } else {
        Ok(find_op(ops, op.repr)?.bin()?.prio)
    }
}

fn is_left_assoc<T: Copy>(op: &OpToken, ops: &[Operator<T>]) -> CalcResult<bool> {
    if op.is_paren() || op.is_unary {
        Ok(false)
    } else {
        Ok(find_op(ops, op.repr)?.bin()?.is_left_assoc)
    }
}

fn check_depth(depth: usize) -> CalcResult<usize> {
    if depth > MAX_TREE_DEPTH {
        Err(calcerr!(
            InvalidExpression,
            "expression is nested deeper than {} levels",
            MAX_TREE_DEPTH
        ))
    } else {
        Ok(depth)
    }
}

/// Pops the top operator and combines it with the operands on top of the expression stack.
/// Each operand is stored with the depth of its tree.
fn apply_operator<T>(
    op_stack: &mut Stack<OpToken>,
    expr_stack: &mut Stack<(Expr<T>, usize)>,
) -> CalcResult<()> {
    let op = op_stack
        .pop()
        .ok_or_else(|| calcerr!(InvalidExpression, "no operator to apply"))?;
    if op.is_unary {
        let (operand, depth) = expr_stack
            .pop()
            .ok_or_else(|| calcerr!(InvalidExpression, "unary {} without operand", op.repr))?;
        let depth = check_depth(depth + 1)?;
        expr_stack.push((Expr::unary(op.repr, operand), depth));
    } else {
        let right = expr_stack.pop();
        let left = expr_stack.pop();
        match (left, right) {
            (Some((left, depth_l)), Some((right, depth_r))) => {
                let depth = check_depth(depth_l.max(depth_r) + 1)?;
                expr_stack.push((Expr::binary(op.repr, left, right), depth));
            }
            _ => {
                return Err(calcerr!(
                    InvalidExpression,
                    "binary {} needs two operands",
                    op.repr
                ))
            }
        }
    }
    Ok(())
}

/// Parses a string into an expression tree with the shunting-yard algorithm. The operators
/// are `+`, `-`, `*`, `/`, `%`, and `^`, whereby `+` and `-` are also unary prefix operators
/// if they occur where an operand is expected. Unary operators bind tighter than any binary
/// operator, so `-2^2` is `(-2)^2`. All binary operators are left-associative.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// let expr = calcex::parse::<f64>("2^3^2 - -1")?;
/// assert_eq!(expr.to_string(), "(((2 ^ 3) ^ 2) - (-1))");
/// #
/// #     Ok(())
/// # }
/// ```
///
/// # Errors
///
/// An error of kind [`UnbalancedParentheses`](crate::ErrorKind::UnbalancedParentheses) is
/// returned if a closing parenthesis has no opening partner, e.g., `2+3)`, or vice versa,
/// e.g., `(2+3`.
///
/// An error of kind [`InvalidExpression`](crate::ErrorKind::InvalidExpression) is returned if
///
/// * an operand cannot be read, see [`next_operand`](next_operand),
/// * two operands are not separated by an operator, e.g., `2 3`,
/// * an operator lacks operands, e.g., `2*` or `*2`,
/// * the tree would be nested deeper than 512 levels, e.g., 1000 unary minuses, or
/// * the text does not contain exactly one expression, e.g., the empty string or `(2)(3)`.
pub fn parse<T: DataType>(text: &str) -> CalcResult<Expr<T>> {
    let ops = make_default_operators::<T>();
    let mut expr_stack = Stack::<(Expr<T>, usize)>::new();
    let mut op_stack = Stack::<OpToken>::new();
    let mut expect_operand = true;
    let mut cursor = 0usize;

    while let Some(c) = text[cursor..].chars().next() {
        if c.is_whitespace() {
            cursor += c.len_utf8();
        } else if c == '(' {
            op_stack.push(OpToken::paren());
            expect_operand = true;
            cursor += 1;
        } else if c == ')' {
            while op_stack.top().map_or(false, |op| !op.is_paren()) {
                apply_operator(&mut op_stack, &mut expr_stack)?;
            }
            if op_stack.pop().is_none() {
                return Err(calcerr!(
                    UnbalancedParentheses,
                    "closing parenthesis at position {} without opening one",
                    cursor
                ));
            }
            expect_operand = false;
            cursor += 1;
        } else if let Some(op) = ops.iter().find(|op| op.repr == c && op.has_bin()) {
            if expect_operand && op.has_unary() {
                op_stack.push(OpToken {
                    repr: c,
                    is_unary: true,
                });
            } else {
                let current = OpToken {
                    repr: c,
                    is_unary: false,
                };
                let prio_current = prio(&current, &ops)?;
                while let Some(top) = op_stack.top() {
                    if top.is_paren() {
                        break;
                    }
                    let prio_top = prio(top, &ops)?;
                    if prio_top > prio_current
                        || (prio_top == prio_current && is_left_assoc(top, &ops)?)
                    {
                        apply_operator(&mut op_stack, &mut expr_stack)?;
                    } else {
                        break;
                    }
                }
                op_stack.push(current);
            }
            expect_operand = true;
            cursor += 1;
        } else {
            if !expect_operand {
                return Err(calcerr!(
                    InvalidExpression,
                    "expected operator at position {} of {}",
                    cursor,
                    text
                ));
            }
            expr_stack.push((next_operand(text, &mut cursor)?, 1));
            expect_operand = false;
        }
    }

    while let Some(top) = op_stack.top() {
        if top.is_paren() {
            return Err(calcerr!(UnbalancedParentheses, "parentheses mismatch in {}", text));
        }
        apply_operator(&mut op_stack, &mut expr_stack)?;
    }

    match (expr_stack.pop(), expr_stack.is_empty()) {
        (Some((expr, _)), true) => Ok(expr),
        (None, _) => Err(calcerr!(InvalidExpression, "cannot parse empty expression")),
        (Some(_), false) => Err(calcerr!(
            InvalidExpression,
            "{} is not a single expression",
            text
        )),
    }
}
