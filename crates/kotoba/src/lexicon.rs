//! Symbol dictionary and word-class configuration
//!
//! Everything in this module is data, not engine logic: which words map to
//! which attributes, and which words count as intensifiers, is supplied per
//! invocation or locale and never hard-coded in the engine.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::value::Value;

/// One dictionary pair: an optional attribute name and an optional value.
///
/// A word may name only an attribute (色 selects `fillStyle`), only a value
/// (赤 contributes `"#e60033"`), or both (跳ね sets `restitution` to 0.8).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Attribute name this word selects, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<String>,

    /// Value this word contributes, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Entry {
    /// Entry naming only an attribute.
    pub fn attr(name: impl Into<String>) -> Self {
        Entry {
            attr: Some(name.into()),
            value: None,
        }
    }

    /// Entry carrying only a value.
    pub fn value(value: impl Into<Value>) -> Self {
        Entry {
            attr: None,
            value: Some(value.into()),
        }
    }

    /// Entry with both an attribute name and a value.
    pub fn pair(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Entry {
            attr: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

/// The symbol dictionary: token text to [`Entry`], insertion-ordered.
///
/// Keys are opaque and case-sensitive. Absence of a key is an expected
/// state (an unrecognized word), not an error. The lexicon is read-only
/// for the whole pipeline and safe to share across threads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lexicon {
    entries: IndexMap<String, Entry>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the entry for a word.
    pub fn define(&mut self, word: impl Into<String>, entry: Entry) {
        self.entries.insert(word.into(), entry);
    }

    /// Look up a word.
    pub fn get(&self, word: &str) -> Option<&Entry> {
        self.entries.get(word)
    }

    /// Check whether a word has an entry.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<W: Into<String>> FromIterator<(W, Entry)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (W, Entry)>>(iter: I) -> Self {
        Lexicon {
            entries: iter.into_iter().map(|(w, e)| (w.into(), e)).collect(),
        }
    }
}

/// Wrapper an attenuating word puts around the fragment that follows it.
///
/// The default routes attenuating words through [`Expr::Amplify`], the
/// same wrapper amplifying words produce; select [`ScaleEffect::Attenuate`]
/// per pack to have downtoner words scale values down instead.
///
/// [`Expr::Amplify`]: crate::Expr::Amplify
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleEffect {
    /// Scale the following fragment's numeric value up (×1.25)
    #[default]
    Amplify,

    /// Scale the following fragment's numeric value down (×0.75)
    Attenuate,
}

/// Intensifier configuration: the amplifying and attenuating word sets,
/// plus the effect attenuators apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordClasses {
    /// Words that strengthen the following fragment (よく, とても)
    pub amplifiers: IndexSet<String>,

    /// Words that soften the following fragment (あまり, 少し)
    pub attenuators: IndexSet<String>,

    /// Wrapper emitted when an attenuator precedes a fragment
    pub attenuator_effect: ScaleEffect,
}

impl WordClasses {
    /// Create empty word classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Word classes built from amplifier and attenuator word lists.
    pub fn with_words<A, B>(amplifiers: A, attenuators: B) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        WordClasses {
            amplifiers: amplifiers.into_iter().map(Into::into).collect(),
            attenuators: attenuators.into_iter().map(Into::into).collect(),
            attenuator_effect: ScaleEffect::default(),
        }
    }

    /// Select the wrapper attenuating words produce.
    pub fn with_attenuator_effect(mut self, effect: ScaleEffect) -> Self {
        self.attenuator_effect = effect;
        self
    }

    /// Check whether a word is an amplifier.
    pub fn is_amplifier(&self, word: &str) -> bool {
        self.amplifiers.contains(word)
    }

    /// Check whether a word is an attenuator.
    pub fn is_attenuator(&self, word: &str) -> bool {
        self.attenuators.contains(word)
    }
}

/// A full, swappable configuration bundle: lexicon plus word classes.
///
/// One pack per locale or per downstream consumer; the engine reads it and
/// never writes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguagePack {
    /// The symbol dictionary
    pub lexicon: Lexicon,

    /// Amplifier/attenuator word sets
    pub classes: WordClasses,
}

impl LanguagePack {
    /// Deserialize a pack from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize the pack to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_lexicon() -> Lexicon {
        let mut lex = Lexicon::new();
        lex.define("色", Entry::attr("fillStyle"));
        lex.define("赤", Entry::value("#e60033"));
        lex.define("跳ね", Entry::pair("restitution", 0.8));
        lex.define("固定", Entry::pair("isStatic", true));
        lex
    }

    #[test]
    fn test_define_and_get() {
        let lex = demo_lexicon();
        assert_eq!(lex.len(), 4);
        assert_eq!(lex.get("色"), Some(&Entry::attr("fillStyle")));
        assert_eq!(lex.get("跳ね"), Some(&Entry::pair("restitution", 0.8)));
    }

    #[test]
    fn test_missing_word_is_not_an_error() {
        let lex = demo_lexicon();
        assert_eq!(lex.get("猫"), None);
        assert!(!lex.contains("猫"));
    }

    #[test]
    fn test_collect_from_pairs() {
        let lex: Lexicon = [
            ("色", Entry::attr("fillStyle")),
            ("赤", Entry::value("#e60033")),
        ]
        .into_iter()
        .collect();
        assert_eq!(lex.len(), 2);
        assert!(lex.contains("赤"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut lex = Lexicon::new();
        lex.define("Red", Entry::value("#ff0000"));
        assert!(lex.contains("Red"));
        assert!(!lex.contains("red"));
    }

    #[test]
    fn test_word_classes_membership() {
        let classes = WordClasses::with_words(["よく", "とても"], ["あまり"]);
        assert!(classes.is_amplifier("よく"));
        assert!(!classes.is_amplifier("あまり"));
        assert!(classes.is_attenuator("あまり"));
        assert_eq!(classes.attenuator_effect, ScaleEffect::Amplify);
    }

    #[test]
    fn test_pack_from_json() {
        let pack = LanguagePack::from_json(
            r##"{
                "lexicon": {
                    "色": { "attr": "fillStyle" },
                    "赤": { "value": "#e60033" },
                    "跳ね": { "attr": "restitution", "value": 0.8 }
                },
                "classes": {
                    "amplifiers": ["よく"],
                    "attenuators": ["あまり"]
                }
            }"##,
        )
        .unwrap();

        assert_eq!(pack.lexicon.get("色"), Some(&Entry::attr("fillStyle")));
        assert_eq!(
            pack.lexicon.get("跳ね"),
            Some(&Entry::pair("restitution", 0.8))
        );
        assert!(pack.classes.is_amplifier("よく"));
        assert_eq!(pack.classes.attenuator_effect, ScaleEffect::Amplify);
    }

    #[test]
    fn test_pack_attenuator_effect_override() {
        let pack = LanguagePack::from_json(
            r#"{ "classes": { "attenuators": ["少し"], "attenuator_effect": "attenuate" } }"#,
        )
        .unwrap();
        assert_eq!(pack.classes.attenuator_effect, ScaleEffect::Attenuate);
    }

    #[test]
    fn test_pack_json_roundtrip() {
        let pack = LanguagePack {
            lexicon: demo_lexicon(),
            classes: WordClasses::with_words(["よく"], ["あまり"]),
        };
        let text = pack.to_json().unwrap();
        assert_eq!(LanguagePack::from_json(&text).unwrap(), pack);
    }

    #[test]
    fn test_bad_pack_is_an_error() {
        assert!(LanguagePack::from_json("{ not json").is_err());
    }
}
