// crosscheck-core/src/domain/value.rs
//
// Raw scalar returned by a connector, independent of the driver's own
// type system. The single coercion point to f64 lives here: anything
// non-numeric becomes None for threshold evaluation, never a type error.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl ScalarValue {
    /// Numeric coercion with a "non-numeric => null" fallback.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Int(i) => Some(*i as f64),
            ScalarValue::Float(f) => Some(*f),
            ScalarValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            ScalarValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Int(i) => write!(f, "{}", i),
            ScalarValue::Float(v) => write!(f, "{}", v),
            ScalarValue::Bool(b) => write!(f, "{}", b),
            ScalarValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Coerces an optional raw scalar to a number. None stays None.
pub fn to_numeric(value: Option<&ScalarValue>) -> Option<f64> {
    value.and_then(ScalarValue::to_f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_variants() {
        assert_eq!(ScalarValue::Int(42).to_f64(), Some(42.0));
        assert_eq!(ScalarValue::Float(1.5).to_f64(), Some(1.5));
        assert_eq!(ScalarValue::Bool(true).to_f64(), Some(1.0));
    }

    #[test]
    fn test_text_parses_or_nulls() {
        assert_eq!(ScalarValue::Text(" 12.25 ".into()).to_f64(), Some(12.25));
        assert_eq!(ScalarValue::Text("n/a".into()).to_f64(), None);
    }

    #[test]
    fn test_to_numeric_none() {
        assert_eq!(to_numeric(None), None);
    }
}
