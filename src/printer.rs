use crate::{data_type::DataType, expression::Expr};

/// Creates a fully parenthesized string of the expression. Every binary and every unary
/// operation gets its own pair of parentheses, hence the result parses back into the
/// same tree although it usually differs from the text the tree was parsed from.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use calcex::{parse, print};
/// let expr = parse::<f64>("-x + 2.5 * y")?;
/// assert_eq!(print(&expr), "((-x) + (2.5 * y))");
/// #
/// #     Ok(())
/// # }
/// ```
pub fn print<T: DataType>(expr: &Expr<T>) -> String {
    let mut res = String::new();
    print_into(expr, &mut res);
    res
}

fn print_into<T: DataType>(expr: &Expr<T>, res: &mut String) {
    match expr {
        Expr::Num(x) => res.push_str(&x.to_string()),
        Expr::Var(name) => res.push_str(name),
        Expr::Binary { op, left, right } => {
            res.push('(');
            print_into(left, res);
            res.push(' ');
            res.push(*op);
            res.push(' ');
            print_into(right, res);
            res.push(')');
        }
        Expr::Unary { op, operand } => {
            res.push('(');
            res.push(*op);
            print_into(operand, res);
            res.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::print;
    use crate::{parse, CalcResult, Expr};

    #[test]
    fn test_print() -> CalcResult<()> {
        fn test(text: &str, reference: &str) -> CalcResult<()> {
            let printed = print(&parse::<f64>(text)?);
            assert_eq!(printed, reference);
            // printing the re-parsed text is a fixed point
            assert_eq!(print(&parse::<f64>(&printed)?), reference);
            Ok(())
        }
        test("2 + 3 * 4", "(2 + (3 * 4))")?;
        test("(2 + 3) * 4", "((2 + 3) * 4)")?;
        test("-2^2", "((-2) ^ 2)")?;
        test("--x", "(-(-x))")?;
        test("+y1", "(+y1)")?;
        test("1.50 / .25 % 5.", "((1.5 / 0.25) % 5)")?;
        test("a-b-c", "((a - b) - c)")?;
        test("((7))", "7")?;
        test("0.1 + 1000000", "(0.1 + 1000000)")?;
        Ok(())
    }

    #[test]
    fn test_print_hand_made() {
        let expr = Expr::binary('&', Expr::num(1.0f32), Expr::unary('!', Expr::var("b")));
        assert_eq!(print(&expr), "(1 & (!b))");
        assert_eq!(print(&Expr::num(-0.5)), "-0.5");
    }
}
