//! Surname / given-name lexicon.
//!
//! `LexiconIndex` reduces raw lexicon records (written forms plus category
//! tags) to two sets of kanji strings. It is built once, never mutated, and
//! passed by reference to the segmenter and alias deriver.

mod io;
#[cfg(test)]
mod tests;

use std::collections::HashSet;

use tracing::{debug, debug_span};

use crate::unicode::is_all_cjk;

/// Error type for building, loading and saving a lexicon.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("lexicon source contains no records")]
    Empty,

    #[error("lexicon source has {records} records but none name a surname or given name")]
    NoNames { records: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected LXNX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),
}

/// What kind of name element a written form represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameCategory {
    Surname,
    Given,
}

/// A decoded lexicon record: candidate written forms and the tags that
/// describe them. Either list may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconRecord {
    pub forms: Vec<String>,
    pub tags: Vec<String>,
}

impl LexiconRecord {
    pub fn new<F, T>(forms: F, tags: T) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            forms: forms.into_iter().map(Into::into).collect(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// `(is_surname, is_given)` according to this record's tags.
    pub fn categories(&self) -> (bool, bool) {
        let mut surname = false;
        let mut given = false;
        for tag in &self.tags {
            match classify_tag(tag) {
                Some(NameCategory::Surname) => surname = true,
                Some(NameCategory::Given) => given = true,
                None => {}
            }
        }
        (surname, given)
    }
}

/// Map a source tag to a name category.
///
/// Covers JMnedict name types (`surname`, `given`, `fem`, `masc`, `person`)
/// and the last POS field of Sudachi/IPAdic person names (`姓`, `名`).
/// ASCII tags compare case-insensitively.
pub fn classify_tag(tag: &str) -> Option<NameCategory> {
    let tag = tag.trim();
    const SURNAME: &[&str] = &["surname", "family", "姓"];
    const GIVEN: &[&str] = &["given", "fem", "masc", "person", "名"];
    if SURNAME.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
        Some(NameCategory::Surname)
    } else if GIVEN.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
        Some(NameCategory::Given)
    } else {
        None
    }
}

#[derive(Debug, Clone)]
pub struct LexiconIndex {
    surnames: HashSet<String>,
    given_names: HashSet<String>,
}

impl LexiconIndex {
    /// Build the index from decoded records.
    ///
    /// Records without a surname/given tag and forms that are not pure kanji
    /// are skipped. An empty record stream, or one that yields no names at
    /// all, is an error: every later segmentation would silently fail.
    pub fn build<I>(records: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = LexiconRecord>,
    {
        let _span = debug_span!("build_lexicon").entered();
        let mut index = Self {
            surnames: HashSet::new(),
            given_names: HashSet::new(),
        };
        let mut record_count = 0usize;
        let mut skipped_forms = 0usize;

        for record in records {
            record_count += 1;
            let (surname, given) = record.categories();
            if !surname && !given {
                continue;
            }
            for form in &record.forms {
                let form = form.trim();
                if !is_all_cjk(form) {
                    skipped_forms += 1;
                    continue;
                }
                if surname {
                    index.surnames.insert(form.to_string());
                }
                if given {
                    index.given_names.insert(form.to_string());
                }
            }
        }

        debug!(
            record_count,
            skipped_forms,
            surnames = index.surnames.len(),
            given_names = index.given_names.len()
        );

        if record_count == 0 {
            return Err(LexiconError::Empty);
        }
        if index.is_empty() {
            return Err(LexiconError::NoNames {
                records: record_count,
            });
        }
        Ok(index)
    }

    /// Build the index from ready-made surname and given-name lists,
    /// applying the same kanji-only filter as [`LexiconIndex::build`].
    pub fn from_sets<S, G>(surnames: S, given_names: G) -> Result<Self, LexiconError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        G: IntoIterator,
        G::Item: Into<String>,
    {
        let surnames = surnames
            .into_iter()
            .map(|s| LexiconRecord::new([s], ["surname"]));
        let given_names = given_names
            .into_iter()
            .map(|g| LexiconRecord::new([g], ["given"]));
        Self::build(surnames.chain(given_names))
    }

    pub fn is_surname(&self, s: &str) -> bool {
        self.surnames.contains(s)
    }

    pub fn is_given_name(&self, s: &str) -> bool {
        self.given_names.contains(s)
    }

    pub fn surname_count(&self) -> usize {
        self.surnames.len()
    }

    pub fn given_name_count(&self) -> usize {
        self.given_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surnames.is_empty() && self.given_names.is_empty()
    }

    /// Surnames in sorted order.
    pub fn surnames(&self) -> Vec<&str> {
        sorted(&self.surnames)
    }

    /// Given names in sorted order.
    pub fn given_names(&self) -> Vec<&str> {
        sorted(&self.given_names)
    }
}

fn sorted(set: &HashSet<String>) -> Vec<&str> {
    let mut v: Vec<&str> = set.iter().map(String::as_str).collect();
    v.sort_unstable();
    v
}
