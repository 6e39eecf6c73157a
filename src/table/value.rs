//! Scalar cell values.
use std::fmt;

/// A single cell.
///
/// Schemas vary by dataset, so cell types are inferred from their textual form when loading (see [Value::infer]).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Infer a value from a raw cell.
    ///
    /// - empty cells are [Value::Null]
    /// - `True`/`False` (any case) are booleans
    /// - integers, then floats containing at least one digit
    /// - anything else is kept as a string, including numbers that would not be written
    ///   back identically (`007`, `+5`)
    pub fn infer(raw: &str) -> Self {
        if raw.is_empty() {
            return Value::Null;
        }
        if raw.eq_ignore_ascii_case("true") {
            return Value::Bool(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return Value::Bool(false);
        }
        if !Self::plain_number(raw) {
            return Value::Str(raw.to_string());
        }
        if let Ok(i) = raw.parse::<i64>() {
            return Value::Int(i);
        }
        // avoids reading "nan" or "inf" words as floats
        if raw.bytes().any(|b| b.is_ascii_digit()) {
            if let Ok(f) = raw.parse::<f64>() {
                return Value::Float(f);
            }
        }
        Value::Str(raw.to_string())
    }

    /// No explicit sign and no leading zero in the integer part.
    fn plain_number(raw: &str) -> bool {
        let digits = raw.strip_prefix('-').unwrap_or(raw).as_bytes();
        match digits {
            [b'+', ..] => false,
            [b'0', next, ..] => !next.is_ascii_digit(),
            _ => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Bool(b) => Some(f64::from(u8::from(*b))),
            _ => None,
        }
    }

    /// Truthiness of a value: non-zero numbers, `true` and non-empty strings.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(i) => write!(f, "{i}"),
            // Debug keeps the decimal point (1.0 instead of 1) so floats stay floats once reloaded
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn infer() {
        assert_eq!(Value::infer(""), Value::Null);
        assert_eq!(Value::infer("True"), Value::Bool(true));
        assert_eq!(Value::infer("false"), Value::Bool(false));
        assert_eq!(Value::infer("42"), Value::Int(42));
        assert_eq!(Value::infer("-3"), Value::Int(-3));
        assert_eq!(Value::infer("0.5"), Value::Float(0.5));
        assert_eq!(Value::infer("nan"), Value::Str("nan".to_string()));
        assert_eq!(Value::infer("hello"), Value::Str("hello".to_string()));
        assert_eq!(Value::infer("0"), Value::Int(0));
        assert_eq!(Value::infer("-0.5"), Value::Float(-0.5));
    }

    #[test]
    fn infer_keeps_zero_padded_numbers() {
        assert_eq!(Value::infer("007"), Value::Str("007".to_string()));
        assert_eq!(Value::infer("-01"), Value::Str("-01".to_string()));
        assert_eq!(Value::infer("00.5"), Value::Str("00.5".to_string()));
        assert_eq!(Value::infer("+5"), Value::Str("+5".to_string()));
    }

    #[test]
    fn display_reinfers() {
        for v in [
            Value::Null,
            Value::Bool(true),
            Value::Int(7),
            Value::Float(1.0),
            Value::Float(0.25),
            Value::Str("word".to_string()),
        ] {
            assert_eq!(Value::infer(&v.to_string()), v);
        }
    }

    #[test]
    fn truthiness() {
        assert!(Value::Int(1).is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Float(0.0).is_truthy());
    }
}
