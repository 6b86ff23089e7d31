//! Lookup aliases for a named entity.
//!
//! Every alias is the native or full name itself, a part of it, or a
//! character-level transform of it (whitespace removal, lower-casing, kana
//! folding). Nothing is added that the input does not contain.


use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::lexicon::LexiconIndex;
use crate::segment::segment_with;
use crate::settings::{settings, Settings};
use crate::unicode::{
    hiragana_to_katakana, is_all_cjk, is_all_kana, katakana_to_hiragana, KATAKANA_MIDDLE_DOT,
};

/// Characters that separate name parts in either script.
pub const SEPARATORS: &[char] = &[
    ' ',
    '\u{3000}', // ideographic space
    '\u{00B7}', // middle dot
    KATAKANA_MIDDLE_DOT,
    '\u{FF65}', // halfwidth katakana middle dot
    '=',
    '＝',
    '\u{2022}', // bullet
    '\u{2027}', // hyphenation point
];

/// A named entity's display names. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    /// Name in its script of origin, usually kanji or kana.
    #[serde(default)]
    pub native: Option<String>,
    /// Secondary form, usually romanized ("Momo Ayase").
    #[serde(default)]
    pub full: Option<String>,
}

impl Name {
    pub fn new(native: impl Into<String>, full: impl Into<String>) -> Self {
        Self {
            native: Some(native.into()),
            full: Some(full.into()),
        }
    }

    /// Trimmed native name, or `""` when absent.
    pub fn native(&self) -> &str {
        self.native.as_deref().map_or("", str::trim)
    }

    /// Trimmed full name, or `""` when absent.
    pub fn full(&self) -> &str {
        self.full.as_deref().map_or("", str::trim)
    }

    pub fn is_empty(&self) -> bool {
        self.native().is_empty() && self.full().is_empty()
    }

    pub fn aliases(&self, lex: Option<&LexiconIndex>) -> BTreeSet<String> {
        derive_aliases(self.native(), self.full(), lex)
    }
}

/// Derive aliases with the process-wide settings.
///
/// See [`derive_aliases_with`].
pub fn derive_aliases(native: &str, full: &str, lex: Option<&LexiconIndex>) -> BTreeSet<String> {
    derive_aliases_with(native, full, lex, settings())
}

/// Collect every string the entity should be searchable by.
///
/// Empty strings stand for a missing name. When the native name has no
/// explicit separator, is pure kanji, and a lexicon is given, it is split
/// into surname and given name with the segmenter.
pub fn derive_aliases_with(
    native: &str,
    full: &str,
    lex: Option<&LexiconIndex>,
    cfg: &Settings,
) -> BTreeSet<String> {
    let _span = debug_span!("derive_aliases").entered();
    let native = native.trim();
    let full = full.trim();
    let mut aliases = BTreeSet::new();
    let mut add = |s: &str| {
        if !s.is_empty() {
            aliases.insert(s.to_string());
        }
    };

    add(native);
    add(full);

    let compact: String = native.chars().filter(|c| !c.is_whitespace()).collect();
    let compact_no_dot: String = compact
        .chars()
        .filter(|&c| c != KATAKANA_MIDDLE_DOT)
        .collect();
    add(&compact);
    add(&compact_no_dot);

    add(&full.to_lowercase());

    let native_parts = split_parts(native);
    if native_parts.len() >= 2 {
        for part in native_parts {
            add(part);
        }
    } else if let Some(lex) = lex.filter(|_| is_all_cjk(native)) {
        if let Some(seg) = segment_with(native, lex, &cfg.segment) {
            add(&seg.surname);
            add(&seg.given);
        }
    }

    let full_parts = split_parts(full);
    if full_parts.len() >= 2 {
        for part in full_parts {
            add(part);
            add(&part.to_lowercase());
        }
    }

    if cfg.alias.kana_variants && is_all_kana(&compact_no_dot) {
        add(&hiragana_to_katakana(&compact_no_dot));
        add(&katakana_to_hiragana(&compact_no_dot));
    }

    debug!(alias_count = aliases.len());
    aliases
}

/// Split on [`SEPARATORS`], dropping empty pieces.
pub fn split_parts(s: &str) -> Vec<&str> {
    s.split(SEPARATORS)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}
