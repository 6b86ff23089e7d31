use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};

use serde::{Deserialize, Serialize};

use namae_core::alias::Name;
use namae_core::lexicon::LexiconIndex;
use namae_core::normalize::normalize_description;

use super::lexicon_ops::open_lexicon;

/// One entity from the upstream API, as a JSON line.
#[derive(Debug, Deserialize)]
pub struct EntityIn {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(flatten)]
    pub name: Name,
    #[serde(default)]
    pub description: Option<String>,
}

/// One entity for the dictionary packager, as a JSON line.
#[derive(Debug, Serialize, Deserialize)]
pub struct EntityOut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(flatten)]
    pub name: Name,
    pub aliases: BTreeSet<String>,
    pub description: String,
}

impl EntityOut {
    pub fn from_entity(entity: EntityIn, lex: Option<&LexiconIndex>) -> Self {
        let aliases = entity.name.aliases(lex);
        Self {
            id: entity.id,
            name: entity.name,
            aliases,
            description: normalize_description(entity.description.as_deref()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub written: usize,
    pub skipped: usize,
}

/// Read entities as JSON lines from `reader` and write one output line per
/// entity to `writer`.
///
/// Blank lines, undecodable lines, and entities with neither a native nor a
/// full name are skipped and counted.
pub fn process_entities<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    lex: Option<&LexiconIndex>,
) -> Result<BatchStats, BatchError> {
    let mut stats = BatchStats::default();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let entity: EntityIn = match serde_json::from_str(&line) {
            Ok(entity) => entity,
            Err(e) => {
                tracing::warn!(line = line_no + 1, "skipping undecodable entity: {e}");
                stats.skipped += 1;
                continue;
            }
        };
        if entity.name.is_empty() {
            tracing::debug!(line = line_no + 1, "skipping entity without a name");
            stats.skipped += 1;
            continue;
        }
        let out = EntityOut::from_entity(entity, lex);
        serde_json::to_writer(&mut writer, &out)?;
        writer.write_all(b"\n")?;
        stats.written += 1;
    }
    writer.flush()?;
    Ok(stats)
}

pub fn aliases(lexicon: Option<&str>, native: &str, full: &str) {
    let lex = lexicon.map(open_lexicon);
    let name = Name::new(native, full);
    let aliases = name.aliases(lex.as_ref());
    let json = die!(serde_json::to_string_pretty(&aliases), "Error encoding aliases: {}");
    println!("{json}");
}

pub fn batch(lexicon: Option<&str>, input_file: &str, output_file: &str) {
    let lex = lexicon.map(open_lexicon);
    let input = die!(File::open(input_file), "Error opening {input_file}: {}");
    let output = die!(File::create(output_file), "Error creating {output_file}: {}");

    eprintln!("Processing {input_file}...");
    let stats = die!(
        process_entities(BufReader::new(input), BufWriter::new(output), lex.as_ref()),
        "Error processing entities: {}"
    );
    eprintln!(
        "Wrote {} entities to {output_file} (skipped {})",
        stats.written, stats.skipped
    );
}

/// Normalize a description file, or stdin when `file` is `-`.
pub fn normalize(file: &str) {
    let markup = if file == "-" {
        let mut buf = String::new();
        die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
        buf
    } else {
        die!(fs::read_to_string(file), "Error reading {file}: {}")
    };
    println!("{}", normalize_description(Some(&markup)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex() -> LexiconIndex {
        LexiconIndex::from_sets(["綾瀬"], ["桃"]).unwrap()
    }

    #[test]
    fn processes_entities() {
        let input = concat!(
            r#"{"id": 1, "native": "綾瀬桃", "full": "Momo Ayase", "description": "<b>Hi</b> ~!secret!~"}"#,
            "\n\n",
            "not json\n",
            r#"{"id": 2, "native": null, "full": null}"#,
            "\n",
            r#"{"native": "山田 太郎"}"#,
            "\n",
        );
        let mut output = Vec::new();
        let lex = lex();
        let stats = process_entities(input.as_bytes(), &mut output, Some(&lex)).unwrap();
        assert_eq!(stats, BatchStats { written: 2, skipped: 2 });

        let lines: Vec<EntityOut> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);

        let momo = &lines[0];
        assert_eq!(momo.id, Some(serde_json::json!(1)));
        assert!(momo.aliases.contains("綾瀬"));
        assert!(momo.aliases.contains("桃"));
        assert!(momo.aliases.contains("momo ayase"));
        assert_eq!(momo.description, "Hi [hidden]");

        let taro = &lines[1];
        assert_eq!(taro.id, None);
        assert!(taro.aliases.contains("山田"));
        assert!(taro.aliases.contains("太郎"));
        assert_eq!(taro.description, "");
    }

    #[test]
    fn output_omits_missing_id() {
        let out = EntityOut::from_entity(
            EntityIn {
                id: None,
                name: Name::new("桃", ""),
                description: None,
            },
            None,
        );
        let json = serde_json::to_string(&out).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"aliases\":[\"桃\"]"));
    }
}
