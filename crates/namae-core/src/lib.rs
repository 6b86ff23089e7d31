//! Lexicon-backed segmentation of Japanese personal names and derivation of
//! the aliases a dictionary should index them under.

pub mod alias;
pub mod lexicon;
pub mod normalize;
pub mod segment;
pub mod settings;
pub mod unicode;

pub use alias::{derive_aliases, Name};
pub use lexicon::{LexiconError, LexiconIndex, LexiconRecord};
pub use normalize::normalize_description;
pub use segment::{segment, Segmentation};
