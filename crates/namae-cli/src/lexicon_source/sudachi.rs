use std::path::Path;

use super::{parse_line_files, LexiconSource, LexiconSourceError};
use namae_core::lexicon::LexiconRecord;

/// SudachiDict raw lexicon CSV.
///
/// Columns: surface(0), left_id(1), right_id(2), cost(3), ..., POS 5..=10.
/// Person names carry `名詞,固有名詞,人名,姓` or `名詞,固有名詞,人名,名`;
/// the last POS field becomes the record's tag. Other entries produce a
/// record without tags, which the index ignores.
/// Files matched: `*.csv` when the input is a directory.
pub struct SudachiSource;

const PERSON_NAME: &str = "人名";

fn parse_line(fields: &[&str]) -> Option<LexiconRecord> {
    if fields.len() < 9 {
        return None;
    }
    let surface = fields[0].trim();
    if surface.is_empty() {
        return None;
    }
    let tags = if fields[7] == PERSON_NAME {
        vec![fields[8].to_string()]
    } else {
        Vec::new()
    };
    Some(LexiconRecord {
        forms: vec![surface.to_string()],
        tags,
    })
}

impl LexiconSource for SudachiSource {
    fn parse(&self, input: &Path) -> Result<Vec<LexiconRecord>, LexiconSourceError> {
        parse_line_files(input, "*.csv", |name| name.ends_with(".csv"), ',', parse_line)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use namae_core::lexicon::LexiconIndex;

    const SAMPLE: &str = "\
綾瀬,4786,4786,6000,綾瀬,名詞,固有名詞,人名,姓,*,*,アヤセ,綾瀬,*,A,*,*,*,*\n\
桃,4788,4788,6500,桃,名詞,固有名詞,人名,名,*,*,モモ,桃,*,A,*,*,*,*\n\
綾瀬,4796,4796,7000,綾瀬,名詞,固有名詞,地名,一般,*,*,アヤセ,綾瀬,*,A,*,*,*,*\n\
山田太郎,4785,4785,8000,山田太郎,名詞,固有名詞,人名,一般,*,*,ヤマダタロウ,山田太郎,*,C,*,*,*,*\n\
broken,line\n";

    #[test]
    fn parse_person_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("small_lex.csv"), SAMPLE).unwrap();

        let records = SudachiSource.parse(dir.path()).unwrap();
        // The two-field line is skipped.
        assert_eq!(records.len(), 4);
        assert_eq!(records[0], LexiconRecord::new(["綾瀬"], ["姓"]));
        assert_eq!(records[1], LexiconRecord::new(["桃"], ["名"]));
        assert!(records[2].tags.is_empty());
        assert_eq!(records[3].tags, vec!["一般".to_string()]);

        let lex = LexiconIndex::build(records).unwrap();
        assert_eq!(lex.surnames(), vec!["綾瀬"]);
        assert_eq!(lex.given_names(), vec!["桃"]);
    }

    #[test]
    fn parse_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = SudachiSource.parse(dir.path());
        assert!(matches!(result, Err(LexiconSourceError::Parse(_))));
    }

    #[test]
    fn parse_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = SudachiSource.parse(&dir.path().join("nope"));
        assert!(matches!(result, Err(LexiconSourceError::Io(_))));
    }
}
