mod jmnedict;
mod sudachi;
mod tsv;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use namae_core::lexicon::LexiconRecord;

pub use jmnedict::JmnedictSource;
pub use sudachi::SudachiSource;
pub use tsv::TsvSource;

/// A pluggable lexicon source that decodes raw files into lexicon records.
pub trait LexiconSource {
    /// Decode `input` (a file, or a directory of source files) into records.
    ///
    /// Malformed individual entries are skipped; unreadable or structurally
    /// invalid input is an error.
    fn parse(&self, input: &Path) -> Result<Vec<LexiconRecord>, LexiconSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconSourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Resolve `input` to the list of files to read.
///
/// A file is returned as-is. For a directory, files whose names satisfy
/// `predicate` are returned sorted by name; an error is returned if there
/// are none, using `label` in the message (e.g. `"*.csv"`).
pub(super) fn source_files(
    input: &Path,
    label: &str,
    predicate: impl Fn(&str) -> bool,
) -> Result<Vec<PathBuf>, LexiconSourceError> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = fs::read_dir(input)
        .map_err(LexiconSourceError::Io)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| predicate(&entry.file_name().to_string_lossy()))
        .map(|entry| entry.path())
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(LexiconSourceError::Parse(format!(
            "no {label} files found in {}",
            input.display()
        )));
    }

    Ok(files)
}

/// Parse line-oriented source files with shared boilerplate: file listing,
/// line iteration, empty/comment skipping, and stats logging.
///
/// `parse_line` receives the split fields of each non-empty, non-comment
/// line. Return `Some(record)` to keep it, `None` to skip.
pub(super) fn parse_line_files(
    input: &Path,
    label: &str,
    predicate: impl Fn(&str) -> bool,
    delimiter: char,
    parse_line: impl Fn(&[&str]) -> Option<LexiconRecord>,
) -> Result<Vec<LexiconRecord>, LexiconSourceError> {
    let files = source_files(input, label, predicate)?;
    let mut records = Vec::new();
    let mut total_lines = 0u64;
    let mut skipped = 0u64;

    for path in &files {
        eprintln!("Reading {}...", path.display());
        let content = fs::read_to_string(path).map_err(LexiconSourceError::Io)?;

        for line in content.lines() {
            total_lines += 1;
            if line.trim().is_empty() || line.starts_with('#') {
                skipped += 1;
                continue;
            }

            let fields: Vec<&str> = line.split(delimiter).collect();
            let Some(record) = parse_line(&fields) else {
                skipped += 1;
                continue;
            };
            records.push(record);
        }
    }

    eprintln!("  (skipped {skipped} of {total_lines} lines)");
    tracing::debug!(files = files.len(), total_lines, skipped, records = records.len());
    Ok(records)
}

/// Create a `LexiconSource` by name. Returns `None` for unknown source names.
pub fn from_name(name: &str) -> Option<Box<dyn LexiconSource>> {
    match name {
        "jmnedict" => Some(Box::new(JmnedictSource)),
        "sudachi" => Some(Box::new(SudachiSource)),
        "tsv" => Some(Box::new(TsvSource)),
        _ => None,
    }
}

/// Names accepted by [`from_name`].
pub const SOURCE_NAMES: &[&str] = &["jmnedict", "sudachi", "tsv"];
