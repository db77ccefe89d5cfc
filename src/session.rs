use crate::{data_type::DataType, evaluator::Evaluator, parser, CalcResult};

const EMPTY_DISPLAY: &str = "0";

/// Formats a value for a calculator display with six decimal places at most. Trailing zeros
/// and a trailing decimal point are cut off.
///
/// ```rust
/// use calcex::session::format_value;
/// assert_eq!(format_value(14.0), "14");
/// assert_eq!(format_value(1.0 / 3.0), "0.333333");
/// assert_eq!(format_value(-2.5), "-2.5");
/// assert_eq!(format_value(f64::INFINITY), "inf");
/// ```
pub fn format_value<T: DataType>(x: T) -> String {
    let mut res = format!("{:.6}", x);
    if res.contains('.') {
        let n_trimmed = res.trim_end_matches('0').trim_end_matches('.').len();
        res.truncate(n_trimmed);
    }
    res
}

/// State of an interactive calculator, i.e., the expression typed so far, the text on the
/// display, and the evaluator with the user's variables. A front end such as a keypad or a
/// terminal feeds input into the session and renders [`display`](Session::display).
#[derive(Clone, Debug)]
pub struct Session<T = f64>
where
    T: DataType,
{
    expression: String,
    display: String,
    evaluator: Evaluator<T>,
}

impl<T: DataType> Session<T> {
    pub fn new() -> Self {
        Session {
            expression: String::new(),
            display: EMPTY_DISPLAY.to_string(),
            evaluator: Evaluator::new(),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn evaluator(&self) -> &Evaluator<T> {
        &self.evaluator
    }

    pub fn evaluator_mut(&mut self) -> &mut Evaluator<T> {
        &mut self.evaluator
    }

    /// Replaces the expression, the display shows it or `0` if it is empty.
    pub fn update_expression(&mut self, expression: &str) {
        self.expression = expression.to_string();
        self.display = if self.expression.is_empty() {
            EMPTY_DISPLAY.to_string()
        } else {
            self.expression.clone()
        };
    }

    /// Appends the text of a pressed key or an inserted variable name.
    pub fn append(&mut self, text: &str) {
        let expression = format!("{}{}", self.expression, text);
        self.update_expression(&expression);
    }

    pub fn backspace(&mut self) {
        let mut expression = self.expression.clone();
        expression.pop();
        self.update_expression(&expression);
    }

    pub fn clear(&mut self) {
        self.update_expression("");
    }

    /// Puts a `-` in front of the expression or removes it if it is already there.
    pub fn toggle_sign(&mut self) {
        if let Some(stripped) = self.expression.strip_prefix('-') {
            let expression = stripped.to_string();
            self.update_expression(&expression);
        } else if !self.expression.is_empty() {
            let expression = format!("-{}", self.expression);
            self.update_expression(&expression);
        }
    }

    /// Parses and evaluates the expression. The display shows the
    /// [formatted](format_value) result or the short text of the error. The expression is
    /// kept either way such that it can be edited further.
    pub fn evaluate(&mut self) -> CalcResult<T> {
        let res = parser::parse(&self.expression).and_then(|expr| self.evaluator.evaluate(&expr));
        self.display = match &res {
            Ok(x) => format_value(*x),
            Err(e) => e.kind.to_string(),
        };
        res
    }
}

impl<T: DataType> Default for Session<T> {
    fn default() -> Self {
        Self::new()
    }
}
