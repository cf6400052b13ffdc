//! Expression state
//!
//! The calculator keeps two pieces of text: the term being typed (`current`)
//! and everything committed before it (`total`). Pressing an operator commits
//! `current + operator` onto `total`; pressing equals commits `current` and
//! evaluates the whole of `total`.
//!
//! The two labels are retained text. They change only when an operation
//! refreshes them, so after `=` the total label still shows the expression
//! that produced the result.

use calccore::text::truncate_chars;
use tracing::{debug, warn};

use crate::eval::{self, Value};

/// What the current label shows when evaluation fails.
pub const ERROR_TEXT: &str = "Error";

/// The current label shows at most this many characters.
pub const CURRENT_DISPLAY_CHARS: usize = 11;

/// Binary operators, in key-column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Divide,
    Multiply,
    Subtract,
    Add,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// Character stored in the expression and understood by the evaluator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Divide => '/',
            Operator::Multiply => '*',
            Operator::Subtract => '-',
            Operator::Add => '+',
        }
    }

    /// Character shown on the key and in the total label.
    pub fn glyph(self) -> char {
        match self {
            Operator::Divide => '\u{00F7}',
            Operator::Multiply => '\u{00D7}',
            Operator::Subtract => '-',
            Operator::Add => '+',
        }
    }

    pub fn from_char(ch: char) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.symbol() == ch)
    }
}

/// Everything a key or button can ask the calculator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A digit `0`-`9` or the decimal point.
    Digit(char),
    Operator(Operator),
    Clear,
    Square,
    Sqrt,
    Evaluate,
}

/// Text currently shown by the two display labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Display {
    pub total: String,
    pub current: String,
}

#[derive(Debug, Clone, Default)]
pub struct Expression {
    total: String,
    current: String,
    display: Display,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> &str {
        &self.total
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn apply(&mut self, action: Action) {
        debug!(?action, "calculator input");
        match action {
            Action::Digit(digit) => self.add_to_expression(digit),
            Action::Operator(op) => self.append_operator(op),
            Action::Clear => self.clear(),
            Action::Square => self.square(),
            Action::Sqrt => self.sqrt(),
            Action::Evaluate => self.evaluate(),
        }
    }

    /// Append a digit or decimal point to the current term. No validation.
    pub fn add_to_expression(&mut self, value: char) {
        self.current.push(value);
        self.update_label();
    }

    /// Commit the current term and `op` onto the running total.
    pub fn append_operator(&mut self, op: Operator) {
        self.current.push(op.symbol());
        self.total.push_str(&self.current);
        self.current.clear();
        self.update_total_label();
        self.update_label();
    }

    pub fn clear(&mut self) {
        self.current.clear();
        self.total.clear();
        self.update_label();
        self.update_total_label();
    }

    pub fn square(&mut self) {
        self.apply_unary("square", Value::square);
    }

    pub fn sqrt(&mut self) {
        self.apply_unary("sqrt", Value::sqrt);
    }

    /// Replace the current term with `f` applied to its value, or with
    /// [`ERROR_TEXT`] if the term does not evaluate.
    fn apply_unary(&mut self, name: &str, f: fn(Value) -> eval::Result<Value>) {
        self.current = match eval::evaluate(&self.current).and_then(f) {
            Ok(value) => value.to_string(),
            Err(err) => {
                warn!(op = name, term = %self.current, %err, "unary operation failed");
                ERROR_TEXT.to_string()
            }
        };
        self.update_label();
    }

    /// Commit the current term and evaluate the whole expression.
    /// The total is cleared whether or not evaluation succeeds.
    pub fn evaluate(&mut self) {
        self.total.push_str(&self.current);
        self.update_total_label();

        self.current = match eval::evaluate(&self.total) {
            Ok(value) => value.to_string(),
            Err(err) => {
                warn!(expression = %self.total, %err, "evaluation failed");
                ERROR_TEXT.to_string()
            }
        };
        self.total.clear();
        self.update_label();
    }

    fn update_total_label(&mut self) {
        self.display.total = render_total(&self.total);
    }

    fn update_label(&mut self) {
        self.display.current = truncate_chars(&self.current, CURRENT_DISPLAY_CHARS).to_string();
    }
}

/// Render a stored total for the total label: each operator becomes its
/// glyph surrounded by spaces.
pub fn render_total(total: &str) -> String {
    Operator::ALL.iter().fold(total.to_string(), |text, op| {
        text.replace(op.symbol(), &format!(" {} ", op.glyph()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(expr: &mut Expression, keys: &str) {
        for ch in keys.chars() {
            let action = match ch {
                '=' => Action::Evaluate,
                'C' => Action::Clear,
                's' => Action::Square,
                'r' => Action::Sqrt,
                _ => match Operator::from_char(ch) {
                    Some(op) => Action::Operator(op),
                    None => Action::Digit(ch),
                },
            };
            expr.apply(action);
        }
    }

    fn after(keys: &str) -> Expression {
        let mut expr = Expression::new();
        press(&mut expr, keys);
        expr
    }

    #[test]
    fn test_starts_empty() {
        let expr = Expression::new();
        assert_eq!(expr.current(), "");
        assert_eq!(expr.total(), "");
        assert_eq!(expr.display(), &Display::default());
    }

    #[test]
    fn test_digits_concatenate() {
        let expr = after("3.14159");
        assert_eq!(expr.current(), "3.14159");
        assert_eq!(expr.display().current, "3.14159");
        assert_eq!(expr.total(), "");
    }

    #[test]
    fn test_no_validation_while_typing() {
        let expr = after("00.1.2");
        assert_eq!(expr.current(), "00.1.2");
    }

    #[test]
    fn test_current_display_truncates_to_eleven_chars() {
        let expr = after("1234567890123");
        assert_eq!(expr.current(), "1234567890123");
        assert_eq!(expr.display().current, "12345678901");
    }

    #[test]
    fn test_operator_commits_term() {
        let expr = after("12+");
        assert_eq!(expr.total(), "12+");
        assert_eq!(expr.current(), "");
        assert_eq!(expr.display().total, "12 + ");
        assert_eq!(expr.display().current, "");
    }

    #[test]
    fn test_full_addition() {
        let expr = after("12+38=");
        assert_eq!(expr.current(), "50");
        assert_eq!(expr.total(), "");
        assert_eq!(expr.display().current, "50");
    }

    #[test]
    fn test_total_label_keeps_evaluated_expression() {
        let expr = after("12+38=");
        assert_eq!(expr.display().total, "12 + 38");
    }

    #[test]
    fn test_division_by_zero_shows_error() {
        let expr = after("5/0=");
        assert_eq!(expr.current(), ERROR_TEXT);
        assert_eq!(expr.total(), "");
        assert_eq!(expr.display().current, "Error");
    }

    #[test]
    fn test_trailing_operator_shows_error() {
        let expr = after("7*=");
        assert_eq!(expr.current(), ERROR_TEXT);
        assert_eq!(expr.total(), "");
    }

    #[test]
    fn test_evaluate_empty_shows_error() {
        let expr = after("=");
        assert_eq!(expr.current(), ERROR_TEXT);
    }

    #[test]
    fn test_precedence_in_accumulated_expression() {
        let expr = after("2+3*4=");
        assert_eq!(expr.current(), "14");
    }

    #[test]
    fn test_result_feeds_next_expression() {
        let expr = after("7-10=+5=");
        assert_eq!(expr.current(), "2");
    }

    #[test]
    fn test_double_operator_uses_unary_sign() {
        let expr = after("5*-3=");
        assert_eq!(expr.current(), "-15");
    }

    #[test]
    fn test_square() {
        let expr = after("9s");
        assert_eq!(expr.current(), "81");
        assert_eq!(expr.display().current, "81");
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(after("16r").current(), "4.0");
        assert_eq!(after("2r").display().current, "1.414213562");
    }

    #[test]
    fn test_unary_on_result() {
        let expr = after("2-5=s");
        assert_eq!(expr.current(), "9");
    }

    #[test]
    fn test_unary_failures_show_error() {
        assert_eq!(after("s").current(), ERROR_TEXT);
        assert_eq!(after("r").current(), ERROR_TEXT);
        assert_eq!(after("2-5=r").current(), ERROR_TEXT);
        assert_eq!(after("1.2.3s").current(), ERROR_TEXT);
    }

    #[test]
    fn test_unary_failure_keeps_total() {
        let expr = after("4+r");
        assert_eq!(expr.current(), ERROR_TEXT);
        assert_eq!(expr.total(), "4+");
    }

    #[test]
    fn test_typing_after_error_appends() {
        let expr = after("5/0=3");
        assert_eq!(expr.current(), "Error3");
        let expr = after("5/0=3=");
        assert_eq!(expr.current(), ERROR_TEXT);
    }

    #[test]
    fn test_clear_resets_everything() {
        let expr = after("12+38=4*C");
        assert_eq!(expr.current(), "");
        assert_eq!(expr.total(), "");
        assert_eq!(expr.display(), &Display::default());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let once = after("9*8C");
        let twice = after("9*8CC");
        assert_eq!(once.current(), twice.current());
        assert_eq!(once.total(), twice.total());
        assert_eq!(once.display(), twice.display());
    }

    #[test]
    fn test_render_total_substitutes_glyphs() {
        assert_eq!(render_total("3*4"), "3 \u{00D7} 4");
        assert_eq!(render_total("8/2-1+"), "8 \u{00F7} 2 - 1 + ");
        assert_eq!(render_total(""), "");
    }

    #[test]
    fn test_render_total_leaves_stored_text() {
        let mut expr = after("3*");
        press(&mut expr, "4");
        expr.apply(Action::Evaluate);
        assert_eq!(expr.display().total, "3 \u{00D7} 4");
        assert_eq!(expr.current(), "12");
    }

    #[test]
    fn test_operator_chars() {
        assert_eq!(Operator::from_char('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_char('x'), None);
        assert_eq!(Operator::Divide.glyph(), '÷');
    }
}
