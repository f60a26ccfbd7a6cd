//! The merge engine: visits a sentence's fragments and folds them into
//! completed expressions
//!
//! A fragment's role only becomes clear once the next fragment arrives: a
//! subject marker captures it, an intensifier wraps it, anything else ends
//! up standalone. The fold therefore keeps exactly one expression of
//! state and runs in a single left-to-right pass with no backtracking.

use crate::expr::Expr;
use crate::lexicon::{ScaleEffect, WordClasses};
use crate::tree::ParseNode;

/// Grammatical role of a parse-tree node, derived from its tag.
///
/// Dispatch is a closed, exhaustive match: a new grammatical construct
/// means a new variant here and a new arm in [`visit`], with [`Other`]
/// staying the single fallback for structural or unrecognized tags.
///
/// [`Other`]: NodeKind::Other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A subject marker: binds the following fragment (色は…)
    Subject,

    /// A negation wrapper (…ではない)
    Not,

    /// Structural or unrecognized
    Other,
}

impl NodeKind {
    /// Classify a node tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Subject" => NodeKind::Subject,
            "Not" => NodeKind::Not,
            _ => NodeKind::Other,
        }
    }
}

/// Convert one parse-tree node into an expression.
///
/// Never fails: a malformed node degrades to a [`Expr::Token`] over its
/// own text rather than an error.
pub fn visit<N: ParseNode>(node: &N) -> Expr {
    match NodeKind::from_tag(node.tag()) {
        // The subject's value fragment arrives later; the merge fold
        // fills it in.
        NodeKind::Subject => Expr::subject(visit_first(node)),
        NodeKind::Not => Expr::negate(visit_first(node)),
        NodeKind::Other => visit_first(node),
    }
}

/// Recurse into the first child, or take the node's own text as a token.
fn visit_first<N: ParseNode>(node: &N) -> Expr {
    match node.children().first() {
        Some(child) => visit(child),
        None => Expr::token(node.text()),
    }
}

/// Folds the fragments of one sentence into completed expressions.
#[derive(Debug)]
pub struct Merger<'a> {
    classes: &'a WordClasses,
    completed: Vec<Expr>,
    prev: Option<Expr>,
}

impl<'a> Merger<'a> {
    /// Create a merger over the given word classes.
    pub fn new(classes: &'a WordClasses) -> Self {
        Merger {
            classes,
            completed: Vec::new(),
            prev: None,
        }
    }

    /// Fold the children of a sentence root into completed expressions.
    ///
    /// Children with an empty tag are structural and skipped.
    pub fn fold<N: ParseNode>(mut self, root: &N) -> Vec<Expr> {
        for node in root.children() {
            if node.tag().is_empty() {
                continue;
            }
            let expr = visit(node);
            self.merge(expr);
        }
        self.finish()
    }

    /// Apply the sequential merge rules to the next expression.
    fn merge(&mut self, cur: Expr) {
        let Some(prev) = self.prev.take() else {
            self.prev = Some(cur);
            return;
        };

        match prev {
            // A subject still awaiting its fragment captures the next one.
            Expr::Let { attr, value: None } => {
                self.completed.push(Expr::Let {
                    attr,
                    value: Some(Box::new(cur)),
                });
            }

            Expr::Token(word) if self.classes.is_amplifier(&word) => {
                self.completed.push(Expr::amplify(cur));
            }

            // Attenuators wrap per the configured effect; see
            // `WordClasses::attenuator_effect`.
            Expr::Token(word) if self.classes.is_attenuator(&word) => {
                let wrapped = match self.classes.attenuator_effect {
                    ScaleEffect::Amplify => Expr::amplify(cur),
                    ScaleEffect::Attenuate => Expr::attenuate(cur),
                };
                self.completed.push(wrapped);
            }

            prev => {
                self.completed.push(prev);
                self.prev = Some(cur);
            }
        }
    }

    /// Flush the trailing expression and hand back the completed list.
    fn finish(mut self) -> Vec<Expr> {
        if let Some(prev) = self.prev.take() {
            self.completed.push(prev);
        }
        self.completed
    }
}

/// Fold one sentence root with the given word classes.
pub fn fold<N: ParseNode>(root: &N, classes: &WordClasses) -> Vec<Expr> {
    Merger::new(classes).fold(root)
}
