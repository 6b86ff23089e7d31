use std::fs;
use std::path::Path;
use std::process;

use namae_core::lexicon::LexiconIndex;
use namae_core::segment::segment;

use crate::lexicon_source::{self, SOURCE_NAMES};

pub fn compile(source_name: &str, input: &str, output_file: &str) {
    let source = lexicon_source::from_name(source_name).unwrap_or_else(|| {
        eprintln!(
            "Error: unknown source '{source_name}' (available: {})",
            SOURCE_NAMES.join(", ")
        );
        process::exit(1);
    });

    let input_path = Path::new(input);
    if !input_path.exists() {
        eprintln!("Error: {input} does not exist");
        process::exit(1);
    }

    eprintln!("Source: {source_name}");
    let records = die!(source.parse(input_path), "Error parsing lexicon: {}");
    eprintln!("Building index from {} records...", records.len());

    let lex = die!(LexiconIndex::build(records), "Error building lexicon: {}");
    eprintln!(
        "  {} surnames, {} given names",
        lex.surname_count(),
        lex.given_name_count()
    );

    die!(
        lex.save(Path::new(output_file)),
        "Error writing lexicon: {}"
    );

    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!(
        "Wrote {output_file} ({:.1} MB)",
        file_size as f64 / 1_048_576.0
    );
}

/// Open a compiled lexicon or exit.
pub fn open_lexicon(file: &str) -> LexiconIndex {
    die!(
        LexiconIndex::open(Path::new(file)),
        "Error opening lexicon {file}: {}"
    )
}

pub fn info(file: &str) {
    let lex = open_lexicon(file);
    let file_size = fs::metadata(file).map(|m| m.len()).unwrap_or(0);
    println!("Lexicon: {file}");
    println!("  Size:        {:.1} MB", file_size as f64 / 1_048_576.0);
    println!("  Surnames:    {}", lex.surname_count());
    println!("  Given names: {}", lex.given_name_count());
}

/// Print `surname given` for each name, or `-` when it cannot be split.
pub fn segment_names(file: &str, names: &[String]) {
    let lex = open_lexicon(file);
    for name in names {
        match segment(name, &lex) {
            Some(seg) => println!("{name}\t{} {}", seg.surname, seg.given),
            None => println!("{name}\t-"),
        }
    }
}
