//! The expression model: tokens, bindings, and modifier wrappers

use std::fmt;

/// One expression in a folded sentence.
///
/// Expressions form a strict tree: every wrapper owns its operands
/// exclusively, and evaluation never mutates them. Raw text operands are
/// promoted to [`Expr::Token`] by the constructors, never at evaluation
/// time.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A leaf referencing one lexicon key (or an unrecognized word)
    Token(String),

    /// A binding: attribute name from `attr`, value from `value`.
    ///
    /// `value` is `None` while the subject still awaits its fragment; the
    /// merge engine fills it in when the next sibling arrives.
    Let {
        /// Operand supplying the attribute name
        attr: Box<Expr>,
        /// Operand supplying the value; `None` until merged
        value: Option<Box<Expr>>,
    },

    /// Scale a numeric result up; identity on anything else
    Amplify(Box<Expr>),

    /// Scale a numeric result down; identity on anything else
    Attenuate(Box<Expr>),

    /// Invert a boolean result; identity on anything else
    Negate(Box<Expr>),
}

impl Expr {
    /// Create a leaf token.
    pub fn token(text: impl Into<String>) -> Self {
        Expr::Token(text.into())
    }

    /// Create a completed binding.
    pub fn bind(attr: impl Into<Expr>, value: impl Into<Expr>) -> Self {
        Expr::Let {
            attr: Box::new(attr.into()),
            value: Some(Box::new(value.into())),
        }
    }

    /// Create a binding whose value fragment has not arrived yet.
    pub fn subject(attr: impl Into<Expr>) -> Self {
        Expr::Let {
            attr: Box::new(attr.into()),
            value: None,
        }
    }

    /// Wrap an operand in the amplifying modifier.
    pub fn amplify(operand: impl Into<Expr>) -> Self {
        Expr::Amplify(Box::new(operand.into()))
    }

    /// Wrap an operand in the attenuating modifier.
    pub fn attenuate(operand: impl Into<Expr>) -> Self {
        Expr::Attenuate(Box::new(operand.into()))
    }

    /// Wrap an operand in the negating modifier.
    pub fn negate(operand: impl Into<Expr>) -> Self {
        Expr::Negate(Box::new(operand.into()))
    }

    /// The token text, if this is a leaf.
    pub fn as_token(&self) -> Option<&str> {
        match self {
            Expr::Token(text) => Some(text),
            _ => None,
        }
    }

    /// Check whether this is a binding still awaiting its value fragment.
    pub fn is_pending_bind(&self) -> bool {
        matches!(self, Expr::Let { value: None, .. })
    }
}

impl From<&str> for Expr {
    fn from(text: &str) -> Self {
        Expr::Token(text.to_owned())
    }
}

impl From<String> for Expr {
    fn from(text: String) -> Self {
        Expr::Token(text)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Token(text) => write!(f, "'{}'", text),
            Expr::Let {
                attr,
                value: Some(value),
            } => write!(f, "Let({},{})", attr, value),
            Expr::Let { attr, value: None } => write!(f, "Let({},_)", attr),
            Expr::Amplify(e) => write!(f, "Amplify({})", e),
            Expr::Attenuate(e) => write!(f, "Attenuate({})", e),
            Expr::Negate(e) => write!(f, "Negate({})", e),
        }
    }
}
