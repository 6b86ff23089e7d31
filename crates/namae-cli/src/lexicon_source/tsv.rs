use std::path::Path;

use super::{parse_line_files, LexiconSource, LexiconSourceError};
use namae_core::lexicon::LexiconRecord;

/// Hand-maintained name list.
///
/// File format: `form\ttag[,tag...]`, e.g. `綾瀬\tsurname` or
/// `和泉\tsurname,given`. Lines starting with `#` are comments.
/// Files matched: `*.tsv` when the input is a directory.
pub struct TsvSource;

fn parse_line(fields: &[&str]) -> Option<LexiconRecord> {
    let [form, tags] = fields else {
        return None;
    };
    let form = form.trim();
    if form.is_empty() {
        return None;
    }
    Some(LexiconRecord {
        forms: vec![form.to_string()],
        tags: tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

impl LexiconSource for TsvSource {
    fn parse(&self, input: &Path) -> Result<Vec<LexiconRecord>, LexiconSourceError> {
        parse_line_files(input, "*.tsv", |name| name.ends_with(".tsv"), '\t', parse_line)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn parse_tsv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.tsv");
        fs::write(
            &path,
            "# curated names\n\
             綾瀬\tsurname\n\
             和泉\tsurname, given\n\
             \n\
             no tab here\n\
             桃\tfem\n",
        )
        .unwrap();

        let records = TsvSource.parse(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1], LexiconRecord::new(["和泉"], ["surname", "given"]));
        assert_eq!(records[2], LexiconRecord::new(["桃"], ["fem"]));
    }

    #[test]
    fn rejects_extra_columns() {
        assert_eq!(parse_line(&["綾瀬", "surname", "extra"]), None);
        assert_eq!(parse_line(&["", "surname"]), None);
    }
}
