//! Conversion driver: evaluate completed expressions in order

use crate::eval::Assignment;
use crate::expr::Expr;
use crate::lexicon::{LanguagePack, Lexicon};
use crate::merge;
use crate::tree::ParseNode;

/// Evaluate each completed expression against the lexicon, in order.
///
/// No aggregation and no conflict resolution: expressions that resolve to
/// the same attribute simply appear in sequence, and the downstream
/// consumer decides what repeated attributes mean.
pub fn convert(exprs: &[Expr], lexicon: &Lexicon) -> Vec<Assignment> {
    exprs.iter().map(|expr| expr.eval(lexicon)).collect()
}

/// Run the whole pipeline over one sentence root.
///
/// Folds the root's fragments with the pack's word classes, then converts
/// the completed expressions against its lexicon.
pub fn interpret<N: ParseNode>(root: &N, pack: &LanguagePack) -> Vec<Assignment> {
    let exprs = merge::fold(root, &pack.classes);
    convert(&exprs, &pack.lexicon)
}
