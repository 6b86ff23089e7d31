pub mod commands;
pub mod lexicon_source;
pub mod trace_init;
