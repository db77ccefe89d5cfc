use calcex::{line_2_statement, parse, session::format_value, CalcError, CalcResult, Session};
use std::io::{self, Write};

fn report(e: &CalcError) {
    eprintln!("Error: {}", e);
}

fn command(session: &mut Session, line: &str) -> CalcResult<()> {
    let (cmd, arg) = match line.split_once(' ') {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (line, ""),
    };
    match cmd {
        ":vars" => {
            for (name, value) in session.evaluator().variables() {
                println!("{name} = {}", format_value(*value));
            }
        }
        ":clear" => session.evaluator_mut().clear_variables(),
        ":unset" => {
            if session.evaluator_mut().remove_variable(arg).is_none() {
                eprintln!("no variable {arg}");
            }
        }
        ":tree" => println!("{}", parse::<f64>(arg)?),
        _ => eprintln!("unknown command {cmd}, try :vars, :clear, :unset <name>, or :tree <expr>"),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut buffer = String::new();
    let mut stdout = io::stdout();
    let stdin = io::stdin();
    let mut session = Session::<f64>::new();
    loop {
        stdout.write_all("> ".as_bytes())?;
        stdout.flush()?;
        buffer.clear();
        if stdin.read_line(&mut buffer)? == 0 {
            break;
        }
        let line = buffer.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }
        if line.starts_with(':') {
            if let Err(e) = command(&mut session, line) {
                report(&e);
            }
            continue;
        }
        if line.contains('=') {
            let res = line_2_statement(line).and_then(|s| session.evaluator_mut().execute(&s));
            match res {
                Ok(x) => println!("{}", format_value(x)),
                Err(e) => report(&e),
            }
        } else {
            session.update_expression(line);
            match session.evaluate() {
                Ok(_) => println!("{}", session.display()),
                Err(e) => report(&e),
            }
        }
    }
    Ok(())
}
