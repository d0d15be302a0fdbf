//! Decoded literal payloads.

use std::fmt;

/// The value a literal token or `Literal` node carries.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    /// String contents without the surrounding quotes.
    Str(String),
    Number(f64),
    Bool(bool),
    Nil,
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Str(s) => f.write_str(s),
            // f64's Display already drops the fraction of integral values.
            LiteralValue::Number(n) => write!(f, "{n}"),
            LiteralValue::Bool(b) => write!(f, "{b}"),
            LiteralValue::Nil => f.write_str("nil"),
        }
    }
}

impl From<f64> for LiteralValue {
    fn from(n: f64) -> Self {
        LiteralValue::Number(n)
    }
}

impl From<bool> for LiteralValue {
    fn from(b: bool) -> Self {
        LiteralValue::Bool(b)
    }
}

impl From<&str> for LiteralValue {
    fn from(s: &str) -> Self {
        LiteralValue::Str(s.to_owned())
    }
}
