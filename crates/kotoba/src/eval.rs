//! Evaluation of expressions against a lexicon
//!
//! Evaluation is a pure function of (expression, lexicon) and is total:
//! unknown words, type-mismatched modifiers, and incomplete bindings all
//! produce ordinary [`Assignment`]s instead of errors.

use std::fmt;

use crate::expr::Expr;
use crate::lexicon::{Entry, Lexicon};
use crate::value::Value;

/// Factor [`Expr::Amplify`] applies to numeric values.
pub const AMPLIFY_FACTOR: f64 = 1.25;

/// Factor [`Expr::Attenuate`] applies to numeric values.
pub const ATTENUATE_FACTOR: f64 = 0.75;

/// The attribute half of an [`Assignment`].
///
/// Three states, kept distinct on purpose: an entry that assigns no
/// attribute name is not the same as a word the lexicon has never seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attr {
    /// The lexicon entry assigns no attribute name
    None,

    /// A concrete attribute name
    Name(String),

    /// The word has no lexicon entry; the assignment's value carries its
    /// literal text
    Unresolved,
}

impl Attr {
    /// Create a named attribute.
    pub fn name(name: impl Into<String>) -> Self {
        Attr::Name(name.into())
    }

    /// The attribute name, if one was assigned.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Attr::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Check whether this is the unresolved marker.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Attr::Unresolved)
    }
}

impl From<Option<String>> for Attr {
    fn from(attr: Option<String>) -> Self {
        match attr {
            Some(name) => Attr::Name(name),
            None => Attr::None,
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attr::None => write!(f, "_"),
            Attr::Name(name) => write!(f, "{}", name),
            Attr::Unresolved => write!(f, "undefined"),
        }
    }
}

/// One attribute/value result produced by evaluating an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// The attribute half
    pub attr: Attr,

    /// The value half; `None` when the expression contributed no value
    pub value: Option<Value>,
}

impl Assignment {
    /// Create an assignment from both halves.
    pub fn new(attr: Attr, value: Option<Value>) -> Self {
        Assignment { attr, value }
    }

    fn from_entry(entry: &Entry) -> Self {
        Assignment {
            attr: Attr::from(entry.attr.clone()),
            value: entry.value.clone(),
        }
    }

    fn unresolved(text: &str) -> Self {
        Assignment {
            attr: Attr::Unresolved,
            value: Some(Value::string(text)),
        }
    }

    /// Scale a numeric value by `factor`; identity on anything else.
    fn scaled(mut self, factor: f64) -> Self {
        if let Some(Value::Number(n)) = self.value {
            self.value = Some(Value::Number(n * factor));
        }
        self
    }

    /// Invert a boolean value; identity on anything else.
    fn negated(mut self) -> Self {
        if let Some(Value::Bool(b)) = self.value {
            self.value = Some(Value::Bool(!b));
        }
        self
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} = {}", self.attr, value),
            None => write!(f, "{} = _", self.attr),
        }
    }
}

impl Expr {
    /// Resolve this expression against `lexicon`.
    ///
    /// Total and pure: no lookup failure, type mismatch, or incomplete
    /// binding is an error. Unknown words come back as [`Attr::Unresolved`]
    /// with their own text as the value; mismatched modifiers pass their
    /// operand through untouched; a binding whose value fragment never
    /// arrived yields its attribute with no value.
    pub fn eval(&self, lexicon: &Lexicon) -> Assignment {
        match self {
            Expr::Token(text) => match lexicon.get(text) {
                Some(entry) => Assignment::from_entry(entry),
                None => Assignment::unresolved(text),
            },

            // Attribute from the left operand, value from the right, even
            // when that discards the other half of either result.
            Expr::Let { attr, value } => Assignment {
                attr: attr.eval(lexicon).attr,
                value: value.as_ref().and_then(|e| e.eval(lexicon).value),
            },

            Expr::Amplify(e) => e.eval(lexicon).scaled(AMPLIFY_FACTOR),
            Expr::Attenuate(e) => e.eval(lexicon).scaled(ATTENUATE_FACTOR),
            Expr::Negate(e) => e.eval(lexicon).negated(),
        }
    }
}
