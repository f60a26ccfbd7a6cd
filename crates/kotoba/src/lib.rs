//! # Kotoba
//!
//! An attribute-binding engine for parsed natural-language descriptions.
//!
//! Kotoba consumes a parse tree produced by an external grammar and turns
//! it into attribute/value assignments for a downstream consumer such as a
//! renderer or a physics-engine configuration. Given a sentence like
//! 色は赤く、よく跳ねる ("the color is red and it bounces a lot"), the
//! engine infers bindings such as `fillStyle = "#e60033"` and
//! `restitution = 1.0`.
//!
//! ## Architecture
//!
//! - **Parse tree**: an external grammar segments the sentence; the engine
//!   only sees [`ParseNode`]s (a tag, a leaf text, ordered children)
//! - **Merge engine**: [`Merger`] visits the sentence's fragments left to
//!   right and folds them into completed [`Expr`]s with one expression of
//!   lookahead state
//! - **Evaluation**: each [`Expr`] resolves against a [`Lexicon`] into an
//!   [`Assignment`]
//!
//! The lexicon and the amplifier/attenuator word classes are configuration
//! data, swappable per invocation or locale via [`LanguagePack`]. The
//! engine itself is hard-coded to no vocabulary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod error;
pub mod eval;
pub mod expr;
pub mod lexicon;
pub mod merge;
pub mod tree;
pub mod value;

// Re-export main types
pub use convert::{convert, interpret};
pub use error::{KotobaError, Result};
pub use eval::{Assignment, Attr, AMPLIFY_FACTOR, ATTENUATE_FACTOR};
pub use expr::Expr;
pub use lexicon::{Entry, LanguagePack, Lexicon, ScaleEffect, WordClasses};
pub use merge::{fold, visit, Merger, NodeKind};
pub use tree::{Node, ParseNode};
pub use value::Value;

/// Kotoba version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
