use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{LexiconError, LexiconIndex};

const MAGIC: &[u8; 4] = b"LXNX";
const VERSION: u8 = 1;
const HEADER_SIZE: usize = 5;

/// On-disk body. Sorted so that identical lexicons compile to identical bytes.
#[derive(Serialize, Deserialize)]
struct LexiconBody {
    surnames: Vec<String>,
    given_names: Vec<String>,
}

impl LexiconIndex {
    /// Serialize to bytes (LXNX format).
    pub fn to_bytes(&self) -> Result<Vec<u8>, LexiconError> {
        let body = LexiconBody {
            surnames: self.surnames().into_iter().map(str::to_string).collect(),
            given_names: self.given_names().into_iter().map(str::to_string).collect(),
        };
        let body = bincode::serialize(&body).map_err(LexiconError::Serialize)?;
        let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    /// Deserialize from bytes (LXNX format).
    ///
    /// Entries go through [`LexiconIndex::from_sets`] again, so a file
    /// written by hand or by an older tool cannot smuggle non-kanji entries
    /// into the index.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LexiconError> {
        if bytes.len() < HEADER_SIZE {
            return Err(LexiconError::InvalidHeader);
        }
        if &bytes[..4] != MAGIC {
            return Err(LexiconError::InvalidMagic);
        }
        if bytes[4] != VERSION {
            return Err(LexiconError::UnsupportedVersion(bytes[4]));
        }
        let body: LexiconBody =
            bincode::deserialize(&bytes[HEADER_SIZE..]).map_err(LexiconError::Deserialize)?;
        Self::from_sets(body.surnames, body.given_names)
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), LexiconError> {
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}
