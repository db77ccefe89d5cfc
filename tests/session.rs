mod utils;
use calcex::{
    line_2_statement, session::format_value, CalcResult, ErrorKind, Evaluator, Session,
};
use utils::assert_float_eq_f64;

#[test]
fn test_keypad() -> CalcResult<()> {
    let mut session = Session::<f64>::new();
    assert_eq!(session.display(), "0");
    for key in ["(", "2", "+", "3", ")", "*", "4"] {
        session.append(key);
    }
    assert_eq!(session.display(), "(2+3)*4");
    assert_float_eq_f64(session.evaluate()?, 20.0);
    assert_eq!(session.display(), "20");
    // the expression survives evaluation and can be edited further
    assert_eq!(session.expression(), "(2+3)*4");
    session.backspace();
    session.append("0.5");
    assert_float_eq_f64(session.evaluate()?, 2.5);
    assert_eq!(session.display(), "2.5");

    session.toggle_sign();
    assert_eq!(session.expression(), "-(2+3)*0.5");
    assert_float_eq_f64(session.evaluate()?, -2.5);
    session.toggle_sign();
    assert_eq!(session.expression(), "(2+3)*0.5");

    session.clear();
    assert_eq!(session.display(), "0");
    session.toggle_sign();
    assert_eq!(session.expression(), "");
    Ok(())
}

#[test]
fn test_error_display() {
    let mut session = Session::<f64>::new();
    let test = |session: &mut Session, expression: &str, kind: ErrorKind, display: &str| {
        session.update_expression(expression);
        let err = session.evaluate().unwrap_err();
        assert_eq!(err.kind, kind);
        assert_eq!(session.display(), display);
        assert_eq!(session.expression(), expression);
    };
    test(&mut session, "5/0", ErrorKind::DivisionByZero, "Division by Zero");
    test(&mut session, "5%(2-2)", ErrorKind::DivisionByZero, "Division by Zero");
    test(&mut session, "(2+3", ErrorKind::UnbalancedParentheses, "Unbalanced Paren");
    test(&mut session, "3.14.15", ErrorKind::InvalidExpression, "Invalid Expr");
    test(&mut session, "r*2", ErrorKind::UndefinedVariable, "Unknown Variable");
    test(&mut session, "", ErrorKind::InvalidExpression, "Invalid Expr");
}

#[test]
fn test_variables_in_session() -> CalcResult<()> {
    let mut session = Session::<f64>::new();
    session.update_expression("r^2 * 3");
    assert!(session.evaluate().is_err());
    session.evaluator_mut().set_variable("r", 2.0);
    assert_float_eq_f64(session.evaluate()?, 12.0);
    session.evaluator_mut().set_variable("r", 0.5);
    assert_float_eq_f64(session.evaluate()?, 0.75);
    assert_eq!(session.display(), "0.75");
    assert_eq!(session.evaluator_mut().remove_variable("r"), Some(0.5));
    assert_eq!(session.evaluator_mut().remove_variable("r"), None);
    assert_eq!(
        session.evaluate().unwrap_err().kind,
        ErrorKind::UndefinedVariable
    );
    Ok(())
}

#[test]
fn test_statements() -> CalcResult<()> {
    let mut evaluator = Evaluator::<f64>::new();
    for (line, reference) in [
        ("a = 3", 3.0),
        ("b=a*2", 6.0),
        ("a = a + b", 9.0),
        ("a - b", 3.0),
        ("  longName1 = -(a % 4) ", -1.0),
    ] {
        let statement = line_2_statement(line)?;
        assert_float_eq_f64(evaluator.execute(&statement)?, reference);
    }
    let names = evaluator.variables().keys().cloned().collect::<Vec<_>>();
    assert_eq!(names, vec!["a", "b", "longName1"]);
    assert_eq!(evaluator.variable("a"), Some(9.0));

    for line in ["1x = 2", "x y = 2", "= 2", "a = b = 1", "a = ", "a = (1"] {
        assert!(line_2_statement::<f64>(line).is_err(), "{}", line);
    }
    // a failed assignment leaves the variable untouched
    let statement = line_2_statement("b = b / 0")?;
    assert_eq!(
        evaluator.execute(&statement).unwrap_err().kind,
        ErrorKind::DivisionByZero
    );
    assert_eq!(evaluator.variable("b"), Some(6.0));
    Ok(())
}

#[test]
fn test_format_value() {
    assert_eq!(format_value(14.0), "14");
    assert_eq!(format_value(0.1 + 0.2), "0.3");
    assert_eq!(format_value(2.0 / 3.0), "0.666667");
    assert_eq!(format_value(-0.0000001), "-0");
    assert_eq!(format_value(1e20), "100000000000000000000");
    assert_eq!(format_value(f64::NAN), "NaN");
    assert_eq!(format_value(0.5f32), "0.5");
}
