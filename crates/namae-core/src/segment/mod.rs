//! Surname / given-name splitting of unspaced kanji names.


use tracing::{debug, debug_span};

use crate::lexicon::LexiconIndex;
use crate::settings::{settings, SegmentSettings};
use crate::unicode::is_all_cjk;

/// A split of a name into a lexicon surname followed by a lexicon given
/// name. `surname + given` always equals the segmented input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub surname: String,
    pub given: String,
    score: i64,
}

impl Segmentation {
    /// The parts as `(surname, given)`.
    pub fn parts(&self) -> (&str, &str) {
        (&self.surname, &self.given)
    }
}

/// Split `name` using the process-wide segment settings.
///
/// See [`segment_with`].
pub fn segment(name: &str, lex: &LexiconIndex) -> Option<Segmentation> {
    segment_with(name, lex, &settings().segment)
}

/// Split `name` into `(surname, given)` against `lex`.
///
/// Returns `None` when the name is not pure kanji, its length in chars is
/// outside `[min_chars, max_chars]`, or no cut point has a known surname on
/// the left and a known given name on the right. `None` means "no confident
/// split": callers keep the name as a single unit.
///
/// Cut points are scanned left to right and the best candidate is replaced
/// only on a strictly greater score, so among equal scores the shortest
/// surname wins.
pub fn segment_with(name: &str, lex: &LexiconIndex, cfg: &SegmentSettings) -> Option<Segmentation> {
    if !is_all_cjk(name) {
        return None;
    }
    // Byte offsets of every char boundary; cuts never split a code point.
    let bounds: Vec<usize> = name.char_indices().map(|(i, _)| i).collect();
    let char_count = bounds.len();
    if char_count < cfg.min_chars || char_count > cfg.max_chars {
        return None;
    }

    let _span = debug_span!("segment", char_count).entered();
    let mut best: Option<Segmentation> = None;

    for (cut, &offset) in bounds.iter().enumerate().skip(1) {
        let (surname, given) = name.split_at(offset);
        if !lex.is_surname(surname) || !lex.is_given_name(given) {
            continue;
        }
        let score = score_cut(cut, char_count - cut, cfg);
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(Segmentation {
                surname: surname.to_string(),
                given: given.to_string(),
                score,
            });
        }
    }

    debug!(found = best.is_some(), best_score = best.as_ref().map(|b| b.score));
    best
}

/// Preference score for a cut with the given part lengths (in chars).
fn score_cut(surname_len: usize, given_len: usize, cfg: &SegmentSettings) -> i64 {
    let surname_bonus = match surname_len {
        2 => cfg.two_char_surname_bonus,
        3 => cfg.three_char_surname_bonus,
        _ => 0,
    };
    let length_bonus =
        surname_len.min(cfg.length_bonus_cap) + given_len.min(cfg.length_bonus_cap);
    let length_bonus = i64::try_from(length_bonus).unwrap_or(i64::MAX);
    cfg.base_score
        .saturating_add(surname_bonus)
        .saturating_add(length_bonus)
}
