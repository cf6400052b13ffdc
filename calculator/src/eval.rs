//! Arithmetic evaluator
//!
//! A small recursive-descent evaluator for the expressions the calculator
//! builds: numbers, unary signs and the four binary operators with the usual
//! precedence. Nothing else is accepted.
//!
//! ```text
//! expr     := term (('+' | '-') term)*
//! term     := unary (('*' | '/') unary)*
//! unary    := ('+' | '-') unary | number
//! number   := digits ['.' [digits]] [exponent] | '.' digits [exponent]
//! exponent := ('e' | 'E') ['+' | '-'] digits
//! ```

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character {ch:?} at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of a negative number")]
    NegativeRoot,
    #[error("result is not a finite number")]
    NotFinite,
}

pub type Result<T> = std::result::Result<T, EvalError>;

/// A number produced by the evaluator.
///
/// Integers stay exact until an operation needs a fraction (division, square
/// root) or overflows `i64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
}

impl Value {
    fn as_f64(self) -> f64 {
        match self {
            Value::Integer(n) => n as f64,
            Value::Real(x) => x,
        }
    }

    fn finite(x: f64) -> Result<Value> {
        if x.is_finite() {
            Ok(Value::Real(x))
        } else {
            Err(EvalError::NotFinite)
        }
    }

    fn integer_op(
        self,
        rhs: Value,
        checked: fn(i64, i64) -> Option<i64>,
        real: fn(f64, f64) -> f64,
    ) -> Result<Value> {
        if let (Value::Integer(a), Value::Integer(b)) = (self, rhs) {
            if let Some(n) = checked(a, b) {
                return Ok(Value::Integer(n));
            }
        }
        Value::finite(real(self.as_f64(), rhs.as_f64()))
    }

    pub fn add(self, rhs: Value) -> Result<Value> {
        self.integer_op(rhs, i64::checked_add, |a, b| a + b)
    }

    pub fn sub(self, rhs: Value) -> Result<Value> {
        self.integer_op(rhs, i64::checked_sub, |a, b| a - b)
    }

    pub fn mul(self, rhs: Value) -> Result<Value> {
        self.integer_op(rhs, i64::checked_mul, |a, b| a * b)
    }

    /// True division; the quotient is always real.
    pub fn div(self, rhs: Value) -> Result<Value> {
        let divisor = rhs.as_f64();
        if divisor == 0.0 {
            return Err(EvalError::DivisionByZero);
        }
        Value::finite(self.as_f64() / divisor)
    }

    pub fn neg(self) -> Result<Value> {
        match self {
            Value::Integer(n) => Ok(n
                .checked_neg()
                .map(Value::Integer)
                .unwrap_or(Value::Real(-(n as f64)))),
            Value::Real(x) => Ok(Value::Real(-x)),
        }
    }

    pub fn square(self) -> Result<Value> {
        self.mul(self)
    }

    pub fn sqrt(self) -> Result<Value> {
        let x = self.as_f64();
        if x < 0.0 {
            return Err(EvalError::NegativeRoot);
        }
        Value::finite(x.sqrt())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Real(x) => f.write_str(&format_real(x)),
        }
    }
}

/// Shortest round-trip decimal, always with a fractional part, switching to
/// scientific notation for very large or very small magnitudes.
fn format_real(x: f64) -> String {
    let magnitude = x.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_scientific(x);
    }
    let s = x.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

fn format_scientific(x: f64) -> String {
    // `{:e}` yields e.g. "1.5e16" or "1e-5"
    let s = format!("{x:e}");
    let Some((mantissa, exponent)) = s.split_once('e') else {
        return s;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Evaluate an arithmetic expression.
pub fn evaluate(input: &str) -> Result<Value> {
    let mut parser = Parser::new(input);
    parser.skip_whitespace();
    if parser.peek().is_none() {
        return Err(EvalError::Empty);
    }
    let value = parser.expr()?;
    parser.skip_whitespace();
    match parser.peek() {
        None => Ok(value),
        Some((pos, ch)) => Err(EvalError::UnexpectedChar { ch, pos }),
    }
}

struct Parser<'a> {
    input: &'a str,
    chars: Vec<(usize, char)>,
    cursor: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().collect(),
            cursor: 0,
        }
    }

    fn peek(&self) -> Option<(usize, char)> {
        self.chars.get(self.cursor).copied()
    }

    fn peek_char(&self) -> Option<char> {
        self.peek().map(|(_, ch)| ch)
    }

    fn bump(&mut self) {
        self.cursor += 1;
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Consume the next non-blank character if it is one of `ops`.
    fn operator(&mut self, ops: &[char]) -> Option<char> {
        self.skip_whitespace();
        let ch = self.peek_char().filter(|ch| ops.contains(ch))?;
        self.bump();
        Some(ch)
    }

    fn expr(&mut self) -> Result<Value> {
        let mut value = self.term()?;
        while let Some(op) = self.operator(&['+', '-']) {
            let rhs = self.term()?;
            value = match op {
                '+' => value.add(rhs)?,
                _ => value.sub(rhs)?,
            };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<Value> {
        let mut value = self.unary()?;
        while let Some(op) = self.operator(&['*', '/']) {
            let rhs = self.unary()?;
            value = match op {
                '*' => value.mul(rhs)?,
                _ => value.div(rhs)?,
            };
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<Value> {
        match self.operator(&['+', '-']) {
            Some('-') => self.unary()?.neg(),
            Some(_) => self.unary(),
            None => self.number(),
        }
    }

    fn digits(&mut self) -> usize {
        let start = self.cursor;
        while self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
            self.bump();
        }
        self.cursor - start
    }

    fn byte_offset(&self) -> usize {
        self.peek().map_or(self.input.len(), |(pos, _)| pos)
    }

    fn number(&mut self) -> Result<Value> {
        self.skip_whitespace();
        let (start, first) = self.peek().ok_or(EvalError::UnexpectedEnd)?;
        if !(first.is_ascii_digit() || first == '.') {
            return Err(EvalError::UnexpectedChar { ch: first, pos: start });
        }

        let whole = self.digits();
        let mut real = false;
        if self.peek_char() == Some('.') {
            self.bump();
            real = true;
            if self.digits() == 0 && whole == 0 {
                return Err(EvalError::InvalidNumber(".".to_string()));
            }
        }
        if matches!(self.peek_char(), Some('e' | 'E')) {
            self.bump();
            real = true;
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.bump();
            }
            if self.digits() == 0 {
                let literal = &self.input[start..self.byte_offset()];
                return Err(EvalError::InvalidNumber(literal.to_string()));
            }
        }

        let literal = &self.input[start..self.byte_offset()];
        if !real {
            if let Ok(n) = literal.parse::<i64>() {
                return Ok(Value::Integer(n));
            }
        }
        literal
            .parse::<f64>()
            .map_err(|_| EvalError::InvalidNumber(literal.to_string()))
            .and_then(Value::finite)
    }
}
