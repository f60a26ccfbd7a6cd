//! Scalar runtime values carried by lexicon entries and assignments

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar value attached to a word or produced by evaluation.
///
/// Lexicon entries carry booleans (flags such as `isStatic`), numbers
/// (quantities such as `restitution`), or strings (colors, identifiers).
/// The serde representation is untagged, so a pack JSON writes bare
/// scalars: `true`, `0.8`, `"#e60033"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean flag
    Bool(bool),

    /// Numeric quantity, stored as `f64`
    Number(f64),

    /// Text
    Str(String),
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if the value is a boolean.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if the value is numeric.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Check if the value is a string.
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════

    /// Extract the boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract the numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract the string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Human-readable name of the value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_and_extractors() {
        assert!(Value::Bool(true).is_bool());
        assert!(Value::Number(0.8).is_number());
        assert!(Value::string("#e60033").is_str());

        assert_eq!(Value::Bool(false).as_bool(), Some(false));
        assert_eq!(Value::Number(0.8).as_f64(), Some(0.8));
        assert_eq!(Value::string("x").as_str(), Some("x"));

        assert_eq!(Value::Bool(true).as_f64(), None);
        assert_eq!(Value::Number(1.0).as_str(), None);
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(0.8), Value::Number(0.8));
        assert_eq!(Value::from(3), Value::Number(3.0));
        assert_eq!(Value::from("赤"), Value::string("赤"));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Bool(true).type_name(), "bool");
        assert_eq!(Value::Number(1.0).type_name(), "number");
        assert_eq!(Value::string("").type_name(), "string");
    }

    #[test]
    fn test_serde_untagged() {
        let v: Value = serde_json::from_str("true").unwrap();
        assert_eq!(v, Value::Bool(true));

        let v: Value = serde_json::from_str("0.8").unwrap();
        assert_eq!(v, Value::Number(0.8));

        let v: Value = serde_json::from_str("\"#e60033\"").unwrap();
        assert_eq!(v, Value::string("#e60033"));

        assert_eq!(serde_json::to_string(&Value::Number(0.8)).unwrap(), "0.8");
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Number(1.0).to_string(), "1");
        assert_eq!(Value::string("#e60033").to_string(), "#e60033");
    }
}
