use crate::{calcerr, data_type::DataType, definitions::N_OPS_IN_TABLE, CalcError, CalcResult};
use smallvec::SmallVec;

/// Priority of the `(` sentinel on the operator stack. Lower than any operator.
pub const PRIO_PAREN: i32 = 0;
/// Unary operators bind tighter than every binary operator, e.g., `-2^2 == 4`.
pub const PRIO_UNARY: i32 = 4;

fn make_op_not_available_error(repr: char) -> CalcError {
    calcerr!(InvalidOperator, "operator {} not available", repr)
}

/// A binary operator that consists of a function pointer, a priority, and its associativity.
#[derive(Copy, Clone, Debug)]
pub struct BinOp<T> {
    /// Implementation of the binary operation, e.g., `|a, b| Ok(a * b)` for multiplication.
    /// Division-like operators report a zero divisor through the result.
    pub apply: fn(T, T) -> CalcResult<T>,
    /// Priority of the binary operation. A binary operation with a
    /// higher number will be executed first.
    pub prio: i32,
    /// Whether `a op b op c` groups as `(a op b) op c`.
    pub is_left_assoc: bool,
}

/// An operator is identified by the single character that represents it in the text.
/// It can have a binary form, a unary prefix form, or both like `-`.
#[derive(Copy, Clone, Debug)]
pub struct Operator<T> {
    pub repr: char,
    pub bin_op: Option<BinOp<T>>,
    pub unary_op: Option<fn(T) -> T>,
}

impl<T: Copy> Operator<T> {
    pub fn make_bin(repr: char, bin_op: BinOp<T>) -> Self {
        Operator {
            repr,
            bin_op: Some(bin_op),
            unary_op: None,
        }
    }
    pub fn make_bin_unary(repr: char, bin_op: BinOp<T>, unary_op: fn(T) -> T) -> Self {
        Operator {
            repr,
            bin_op: Some(bin_op),
            unary_op: Some(unary_op),
        }
    }
    pub fn bin(&self) -> CalcResult<BinOp<T>> {
        self.bin_op
            .ok_or_else(|| make_op_not_available_error(self.repr))
    }
    pub fn unary(&self) -> CalcResult<fn(T) -> T> {
        self.unary_op
            .ok_or_else(|| make_op_not_available_error(self.repr))
    }
    pub fn has_bin(&self) -> bool {
        self.bin_op.is_some()
    }
    pub fn has_unary(&self) -> bool {
        self.unary_op.is_some()
    }
}

pub type OpTable<T> = SmallVec<[Operator<T>; N_OPS_IN_TABLE]>;

/// Looks up the operator with representation `repr`.
///
/// # Errors
///
/// An error of kind [`InvalidOperator`](crate::ErrorKind::InvalidOperator) is returned if
/// there is no such operator in `ops`.
pub fn find_op<T: Copy>(ops: &[Operator<T>], repr: char) -> CalcResult<&Operator<T>> {
    ops.iter()
        .find(|op| op.repr == repr)
        .ok_or_else(|| make_op_not_available_error(repr))
}

fn div<T: DataType>(a: T, b: T) -> CalcResult<T> {
    if b == T::zero() {
        Err(calcerr!(DivisionByZero, "{} / {}", a, b))
    } else {
        Ok(a / b)
    }
}

fn rem<T: DataType>(a: T, b: T) -> CalcResult<T> {
    if b == T::zero() {
        Err(calcerr!(DivisionByZero, "{} % {}", a, b))
    } else {
        // truncated remainder, the sign follows the dividend like C's fmod
        Ok(a % b)
    }
}

/// Returns the calculator operators `+`, `-`, `*`, `/`, `%`, and `^`. The first two
/// also have unary prefix forms. All of them are left-associative, including `^`,
/// hence `2^3^2 == 64`.
pub fn make_default_operators<T: DataType>() -> OpTable<T> {
    let mut ops = OpTable::<T>::new();
    ops.push(Operator::make_bin_unary(
        '+',
        BinOp {
            apply: |a: T, b: T| Ok(a + b),
            prio: 1,
            is_left_assoc: true,
        },
        |a: T| a,
    ));
    ops.push(Operator::make_bin_unary(
        '-',
        BinOp {
            apply: |a: T, b: T| Ok(a - b),
            prio: 1,
            is_left_assoc: true,
        },
        |a: T| -a,
    ));
    ops.push(Operator::make_bin(
        '*',
        BinOp {
            apply: |a: T, b: T| Ok(a * b),
            prio: 2,
            is_left_assoc: true,
        },
    ));
    ops.push(Operator::make_bin(
        '/',
        BinOp {
            apply: div::<T>,
            prio: 2,
            is_left_assoc: true,
        },
    ));
    ops.push(Operator::make_bin(
        '%',
        BinOp {
            apply: rem::<T>,
            prio: 2,
            is_left_assoc: true,
        },
    ));
    ops.push(Operator::make_bin(
        '^',
        BinOp {
            apply: |a: T, b: T| Ok(a.powf(b)),
            prio: 3,
            is_left_assoc: true,
        },
    ));
    ops
}
