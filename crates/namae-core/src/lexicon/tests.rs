use super::*;

fn sample_records() -> Vec<LexiconRecord> {
    vec![
        LexiconRecord::new(["綾瀬"], ["surname"]),
        LexiconRecord::new(["桃"], ["fem"]),
        LexiconRecord::new(["山田", "山だ"], ["surname"]),
        LexiconRecord::new(["太郎"], ["masc", "given"]),
        LexiconRecord::new(["和泉"], ["surname", "given"]),
        LexiconRecord::new(["東京"], ["place"]),
        LexiconRecord::new(Vec::<String>::new(), ["surname"]),
    ]
}

#[test]
fn build_splits_by_category() {
    let lex = LexiconIndex::build(vec![
        LexiconRecord::new(["綾瀬"], ["surname"]),
        LexiconRecord::new(["桃"], ["given"]),
    ])
    .unwrap();
    assert_eq!(lex.surnames(), vec!["綾瀬"]);
    assert_eq!(lex.given_names(), vec!["桃"]);
}

#[test]
fn build_filters_non_cjk_forms() {
    let lex = LexiconIndex::build(sample_records()).unwrap();
    assert!(lex.is_surname("山田"));
    assert!(!lex.is_surname("山だ"));
    assert!(!lex.is_surname("Α瀬"));

    let lex = LexiconIndex::build(vec![
        LexiconRecord::new(["Α瀬"], ["surname"]),
        LexiconRecord::new(["桃"], ["given"]),
    ])
    .unwrap();
    assert_eq!(lex.surname_count(), 0);
    assert_eq!(lex.given_name_count(), 1);
}

#[test]
fn build_record_with_both_categories() {
    let lex = LexiconIndex::build(sample_records()).unwrap();
    assert!(lex.is_surname("和泉"));
    assert!(lex.is_given_name("和泉"));
    assert!(lex.is_given_name("太郎"));
    assert!(!lex.is_surname("太郎"));
}

#[test]
fn build_skips_uncategorised_records() {
    let lex = LexiconIndex::build(sample_records()).unwrap();
    assert!(!lex.is_surname("東京"));
    assert!(!lex.is_given_name("東京"));
    assert_eq!(lex.surname_count(), 3);
    assert_eq!(lex.given_name_count(), 3);
}

#[test]
fn build_trims_forms() {
    let lex = LexiconIndex::build(vec![LexiconRecord::new([" 綾瀬\n"], ["surname"])]).unwrap();
    assert!(lex.is_surname("綾瀬"));
}

#[test]
fn build_empty_source_is_error() {
    let err = LexiconIndex::build(Vec::new()).unwrap_err();
    assert!(matches!(err, LexiconError::Empty));
}

#[test]
fn build_without_names_is_error() {
    let err = LexiconIndex::build(vec![
        LexiconRecord::new(["東京"], ["place"]),
        LexiconRecord::new(["Momo"], ["given"]),
    ])
    .unwrap_err();
    assert!(matches!(err, LexiconError::NoNames { records: 2 }));
}

#[test]
fn classify_known_tags() {
    assert_eq!(classify_tag("surname"), Some(NameCategory::Surname));
    assert_eq!(classify_tag("Family"), Some(NameCategory::Surname));
    assert_eq!(classify_tag("姓"), Some(NameCategory::Surname));
    assert_eq!(classify_tag("given"), Some(NameCategory::Given));
    assert_eq!(classify_tag("fem"), Some(NameCategory::Given));
    assert_eq!(classify_tag("masc"), Some(NameCategory::Given));
    assert_eq!(classify_tag("person"), Some(NameCategory::Given));
    assert_eq!(classify_tag(" 名 "), Some(NameCategory::Given));
    assert_eq!(classify_tag("place"), None);
    assert_eq!(classify_tag(""), None);
}

#[test]
fn from_sets_applies_filter() {
    let lex = LexiconIndex::from_sets(["綾瀬", "あやせ"], ["桃"]).unwrap();
    assert_eq!(lex.surnames(), vec!["綾瀬"]);
    assert!(LexiconIndex::from_sets(Vec::<String>::new(), Vec::<String>::new()).is_err());
}

#[test]
fn bytes_round_trip() {
    let lex = LexiconIndex::build(sample_records()).unwrap();
    let bytes = lex.to_bytes().unwrap();
    assert_eq!(&bytes[..4], b"LXNX");
    let loaded = LexiconIndex::from_bytes(&bytes).unwrap();
    assert_eq!(loaded.surnames(), lex.surnames());
    assert_eq!(loaded.given_names(), lex.given_names());
    // Sorted body makes the encoding deterministic.
    assert_eq!(loaded.to_bytes().unwrap(), bytes);
}

#[test]
fn from_bytes_rejects_bad_header() {
    assert!(matches!(
        LexiconIndex::from_bytes(b"LX"),
        Err(LexiconError::InvalidHeader)
    ));
    assert!(matches!(
        LexiconIndex::from_bytes(b"LXDX\x01"),
        Err(LexiconError::InvalidMagic)
    ));
    assert!(matches!(
        LexiconIndex::from_bytes(b"LXNX\x09"),
        Err(LexiconError::UnsupportedVersion(9))
    ));
    assert!(matches!(
        LexiconIndex::from_bytes(b"LXNX\x01\xff"),
        Err(LexiconError::Deserialize(_))
    ));
}

#[test]
fn save_and_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.lxnx");
    let lex = LexiconIndex::build(sample_records()).unwrap();
    lex.save(&path).unwrap();
    assert!(!path.with_extension("tmp").exists());

    let loaded = LexiconIndex::open(&path).unwrap();
    assert!(loaded.is_surname("綾瀬"));
    assert!(loaded.is_given_name("桃"));
}

#[test]
fn open_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = LexiconIndex::open(&dir.path().join("missing.lxnx")).unwrap_err();
    assert!(matches!(err, LexiconError::Io(_)));
}
