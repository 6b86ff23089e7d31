//! Character-level Unicode classification for Japanese names.

/// Iteration mark 々, which repeats the preceding kanji (佐々木, 野々村).
pub const ITERATION_MARK: char = '\u{3005}';

/// Katakana middle dot ・, the conventional separator in transliterated names.
pub const KATAKANA_MIDDLE_DOT: char = '\u{30FB}';

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes the middle dot
/// and the prolonged sound mark ー.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// CJK Unified Ideographs, Extension A and Extension B.
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

/// Whether `s` is a non-empty run of kanji (or 々) once surrounding
/// whitespace is trimmed.
///
/// Segmentation only applies to strings accepted here; kana and Latin
/// names cannot be split against a kanji lexicon.
pub fn is_all_cjk(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && s.chars().all(|c| is_kanji(c) || c == ITERATION_MARK)
}

/// Whether `s` is a non-empty run of kana. The middle dot is excluded so
/// that separated names are handled by splitting instead.
pub fn is_all_kana(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_kana(c) && c != KATAKANA_MIDDLE_DOT)
}

/// Convert a hiragana string to katakana.
/// Only ぁ..ゖ and ゝゞ are shifted; the combining marks and ゟ would land on
/// unrelated katakana symbols, so they and everything else (ー, ASCII, etc.)
/// are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{3041}'..='\u{3096}').contains(&c) || ('\u{309D}'..='\u{309E}').contains(&c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Convert a katakana string to hiragana.
/// Only ァ..ヶ and the voiced iteration marks have hiragana counterparts;
/// everything else (ー, ・, ヷ..ヺ) is passed through unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{30A1}'..='\u{30F6}').contains(&c) || ('\u{30FD}'..='\u{30FE}').contains(&c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
