use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use super::{source_files, LexiconSource, LexiconSourceError};
use namae_core::lexicon::LexiconRecord;

/// JMnedict in the jmdict-simplified JSON export.
///
/// Only the fields needed for name classification are decoded:
/// `words[].kanji[].text` as the written forms and
/// `words[].translation[].type[]` as the tags (`surname`, `given`, `fem`, ...).
/// Files matched: `*.json` when the input is a directory.
pub struct JmnedictSource;

#[derive(Deserialize)]
struct JmnedictFile {
    words: Vec<JmnedictWord>,
}

#[derive(Deserialize)]
struct JmnedictWord {
    #[serde(default)]
    kanji: Vec<JmnedictText>,
    #[serde(default)]
    translation: Vec<JmnedictTranslation>,
}

#[derive(Deserialize)]
struct JmnedictText {
    text: String,
}

#[derive(Deserialize)]
struct JmnedictTranslation {
    #[serde(default, rename = "type")]
    name_types: Vec<String>,
}

impl From<JmnedictWord> for LexiconRecord {
    fn from(word: JmnedictWord) -> Self {
        LexiconRecord {
            forms: word.kanji.into_iter().map(|k| k.text).collect(),
            tags: word
                .translation
                .into_iter()
                .flat_map(|t| t.name_types)
                .collect(),
        }
    }
}

impl LexiconSource for JmnedictSource {
    fn parse(&self, input: &Path) -> Result<Vec<LexiconRecord>, LexiconSourceError> {
        let mut records = Vec::new();
        for path in source_files(input, "*.json", |name| name.ends_with(".json"))? {
            eprintln!("Reading {}...", path.display());
            let reader = BufReader::new(File::open(&path)?);
            let file: JmnedictFile = serde_json::from_reader(reader).map_err(|e| {
                LexiconSourceError::Parse(format!("{}: JMnedict JSON: {e}", path.display()))
            })?;
            records.extend(file.words.into_iter().map(LexiconRecord::from));
        }
        tracing::debug!(records = records.len(), "decoded JMnedict");
        Ok(records)
    }
}
