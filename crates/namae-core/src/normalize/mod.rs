//! Plain-text rendering of entity descriptions.
//!
//! Descriptions arrive as AniList-flavoured markup: HTML tags, a handful of
//! named entities, and `~!…!~` spoiler regions. The output is plain text
//! with spoilers redacted.


use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};
use tracing::{debug, debug_span};

use crate::settings::{settings, NormalizeSettings};

/// Longest placeholder accepted by [`check_placeholder`].
pub const MAX_PLACEHOLDER_CHARS: usize = 32;

pub const DEFAULT_PLACEHOLDER: &str = "[hidden]";

static SPOILER_INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)~!.*?!~").expect("valid regex"));
static SPOILER_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<span\s+class\s*=\s*"markdown_spoiler"[^>]*>.*?</span\s*>"#)
        .expect("valid regex")
});
static SPOILER_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bspoilers?\b").expect("valid regex"));
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>|</p\s*>").expect("valid regex"));
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^<>]*>").expect("valid regex"));
static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(nbsp|amp|lt|gt|quot|apos|#39);").expect("valid regex"));
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").expect("valid regex"));

/// Normalize with the process-wide placeholder.
///
/// See [`normalize_description_with`].
pub fn normalize_description(markup: Option<&str>) -> String {
    normalize_description_with(markup, &settings().normalize)
}

/// Redact spoilers and strip markup from a description.
///
/// Spoiler regions become the configured placeholder and stray "spoiler"
/// words are dropped; then `<br>`/`</p>` become newlines, remaining tags are
/// removed, and named entities are decoded. Decoding can expose new markup
/// (`&lt;b&gt;`), so the pass repeats until the text stops changing. The
/// result is therefore a fixed point: normalizing it again is a no-op.
pub fn normalize_description_with(markup: Option<&str>, cfg: &NormalizeSettings) -> String {
    let Some(markup) = markup else {
        return String::new();
    };
    let _span = debug_span!("normalize_description", input_len = markup.len()).entered();
    let placeholder = match check_placeholder(&cfg.spoiler_placeholder) {
        Ok(()) => cfg.spoiler_placeholder.as_str(),
        Err(_) => DEFAULT_PLACEHOLDER,
    };

    // Every pass that changes the text removes a `~` or shortens it (see
    // `check_placeholder`), so this terminates.
    let mut passes = 1usize;
    let mut current = normalize_once(markup, placeholder);
    loop {
        let next = normalize_once(&current, placeholder);
        if next == current {
            break;
        }
        current = next;
        passes += 1;
    }

    debug!(passes, output_len = current.len());
    current
}

fn normalize_once(text: &str, placeholder: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = SPOILER_INLINE.replace_all(&text, NoExpand(placeholder));
    let text = SPOILER_SPAN.replace_all(&text, NoExpand(placeholder));
    let text = SPOILER_WORD.replace_all(&text, "");
    let text = LINE_BREAK.replace_all(&text, "\n");
    let text = TAG.replace_all(&text, "");
    let text = ENTITY.replace_all(&text, |caps: &Captures| decode_entity(&caps[1]));
    let text = BLANK_LINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

fn decode_entity(name: &str) -> &'static str {
    match name {
        "nbsp" => " ",
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        _ => "'",
    }
}

/// Check that a spoiler placeholder survives normalization unchanged.
///
/// A placeholder with markup characters, `~`, or the word "spoiler" would be
/// rewritten by the next pass; a long one could make a pass grow the text.
pub fn check_placeholder(placeholder: &str) -> Result<(), &'static str> {
    if placeholder.chars().count() > MAX_PLACEHOLDER_CHARS {
        return Err("must be at most 32 characters");
    }
    if placeholder.contains(['<', '>', '&', '~']) {
        return Err("must not contain '<', '>', '&' or '~'");
    }
    if SPOILER_WORD.is_match(placeholder) {
        return Err("must not contain the word \"spoiler\"");
    }
    if placeholder.trim() != placeholder {
        return Err("must not start or end with whitespace");
    }
    Ok(())
}
