use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// The kinds of failure shared by tokenizing, parsing, and evaluation.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ErrorKind {
    /// Malformed input, e.g., `2 3`, `3.14.15`, or a dangling operator.
    InvalidExpression,
    /// An operator character the operator table does not know.
    InvalidOperator,
    /// A `(` without `)` or vice versa.
    UnbalancedParentheses,
    /// A variable that has not been set in the evaluator.
    UndefinedVariable,
    /// The right operand of `/` or `%` is exactly zero.
    DivisionByZero,
}

impl ErrorKind {
    /// Short text shown on a calculator display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidExpression => "Invalid Expr",
            ErrorKind::InvalidOperator => "Invalid Operator",
            ErrorKind::UnbalancedParentheses => "Unbalanced Paren",
            ErrorKind::UndefinedVariable => "Unknown Variable",
            ErrorKind::DivisionByZero => "Division by Zero",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// This will be thrown at you if something within Calcex went wrong. Ok, obviously it is not an
/// exception, so thrown needs to be understood figuratively.
///
/// The [`kind`](CalcError::kind) is what callers should branch on. The message carries details
/// such as the offending piece of text.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct CalcError {
    pub kind: ErrorKind,
    pub msg: String,
}

impl CalcError {
    pub fn new(kind: ErrorKind, msg: &str) -> CalcError {
        CalcError {
            kind,
            msg: msg.to_string(),
        }
    }
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl Display for CalcError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.msg)
    }
}
impl Error for CalcError {}

/// Creates a [`CalcError`](CalcError) from an [`ErrorKind`](ErrorKind) variant name and a
/// formatted message.
///
/// ```rust
/// use calcex::{calcerr, ErrorKind};
/// let err = calcerr!(UndefinedVariable, "unknown variable {}", "x");
/// assert_eq!(err.kind, ErrorKind::UndefinedVariable);
/// assert_eq!(err.msg, "unknown variable x");
/// ```
#[macro_export]
macro_rules! calcerr {
    ($kind:ident, $s:literal, $( $exps:expr ),*) => {
        $crate::CalcError::new($crate::ErrorKind::$kind, format!($s, $($exps),*).as_str())
    };
    ($kind:ident, $s:literal) => {
        $crate::CalcError::new($crate::ErrorKind::$kind, format!($s).as_str())
    };
}

/// Calcex' result type with [`CalcError`](CalcError) as error type.
pub type CalcResult<U> = Result<U, CalcError>;

#[test]
fn test_display_texts() {
    let texts = [
        (ErrorKind::InvalidExpression, "Invalid Expr"),
        (ErrorKind::InvalidOperator, "Invalid Operator"),
        (ErrorKind::UnbalancedParentheses, "Unbalanced Paren"),
        (ErrorKind::UndefinedVariable, "Unknown Variable"),
        (ErrorKind::DivisionByZero, "Division by Zero"),
    ];
    for (kind, text) in texts {
        assert_eq!(kind.to_string(), text);
    }
    let err = calcerr!(DivisionByZero, "{} % {}", 5, 0);
    assert_eq!(format!("{err}"), "Division by Zero (5 % 0)");
}
