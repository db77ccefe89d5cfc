use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use smallvec::SmallVec;

use crate::{data_type::DataType, definitions::N_VARS_ON_STACK, parser, printer, CalcError};

#[cfg(feature = "serde")]
mod serde;

/// This is the core data type representing the result of parsing a string. Every
/// node owns its children, hence an expression is a tree without shared sub-trees.
///
/// Expressions are created with [`parse`](crate::parse), equivalently with
/// [`str::parse`], or assembled by hand with the constructors below.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use calcex::Expr;
/// let expr = "2 * -x".parse::<Expr<f64>>()?;
/// let reference = Expr::binary('*', Expr::num(2.0), Expr::unary('-', Expr::var("x")));
/// assert_eq!(expr, reference);
/// assert_eq!(format!("{}", expr), "(2 * (-x))");
/// #
/// #     Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug)]
pub enum Expr<T = f64> {
    Num(T),
    Var(String),
    Binary {
        op: char,
        left: Box<Expr<T>>,
        right: Box<Expr<T>>,
    },
    Unary {
        op: char,
        operand: Box<Expr<T>>,
    },
}

impl<T> Expr<T> {
    pub fn num(x: T) -> Self {
        Expr::Num(x)
    }
    pub fn var(name: &str) -> Self {
        Expr::Var(name.to_string())
    }
    pub fn binary(op: char, left: Expr<T>, right: Expr<T>) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
    pub fn unary(op: char, operand: Expr<T>) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Returns the names of the variables of the expression in alphabetical order without
    /// duplicates.
    pub fn var_names(&self) -> SmallVec<[&str; N_VARS_ON_STACK]> {
        fn collect<'a, T>(expr: &'a Expr<T>, names: &mut SmallVec<[&'a str; N_VARS_ON_STACK]>) {
            match expr {
                Expr::Num(_) => (),
                Expr::Var(name) => names.push(name.as_str()),
                Expr::Binary { left, right, .. } => {
                    collect(left, names);
                    collect(right, names);
                }
                Expr::Unary { operand, .. } => collect(operand, names),
            }
        }
        let mut names = SmallVec::new();
        collect(self, &mut names);
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Number of nodes in the tree.
    pub fn n_nodes(&self) -> usize {
        match self {
            Expr::Num(_) | Expr::Var(_) => 1,
            Expr::Binary { left, right, .. } => 1 + left.n_nodes() + right.n_nodes(),
            Expr::Unary { operand, .. } => 1 + operand.n_nodes(),
        }
    }
}

impl<T: DataType> FromStr for Expr<T> {
    type Err = CalcError;
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parser::parse(text)
    }
}

impl<T: DataType> Display for Expr<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", printer::print(self))
    }
}
