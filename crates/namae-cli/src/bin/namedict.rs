use std::path::PathBuf;

use clap::{Parser, Subcommand};

use namae_cli::commands::{alias_ops, config_ops, lexicon_ops};
use namae_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "namedict", about = "Japanese name lexicon and alias tool")]
struct Cli {
    /// Custom settings TOML file
    #[arg(long, global = true)]
    config: Option<String>,
    /// Write JSON trace lines to this directory
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a name lexicon from raw files
    Compile {
        /// Lexicon source (jmnedict, sudachi, tsv)
        #[arg(long, default_value = "jmnedict")]
        source: String,
        /// Input file or directory
        input: String,
        /// Output file
        output_file: String,
    },
    /// Show lexicon info
    Info {
        /// Lexicon file
        file: String,
    },
    /// Split full names into surname and given name
    Segment {
        /// Lexicon file
        lexicon_file: String,
        /// Names to split
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print the aliases of one name as JSON
    Aliases {
        /// Lexicon file used to split unspaced native names
        #[arg(long)]
        lexicon: Option<String>,
        /// Native (Japanese) name
        #[arg(long, default_value = "")]
        native: String,
        /// Romanized full name
        #[arg(long, default_value = "")]
        full: String,
    },
    /// Derive aliases and clean descriptions for a JSONL entity file
    Batch {
        /// Lexicon file used to split unspaced native names
        #[arg(long)]
        lexicon: Option<String>,
        /// Input JSONL file
        input: String,
        /// Output JSONL file
        output: String,
    },
    /// Normalize a description markup file (`-` for stdin)
    Normalize {
        /// Input file
        #[arg(default_value = "-")]
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.trace_dir.as_deref(), cli.verbose);

    if let Some(config) = &cli.config {
        config_ops::load_config(config);
    }

    match cli.command {
        Command::Compile {
            source,
            input,
            output_file,
        } => lexicon_ops::compile(&source, &input, &output_file),
        Command::Info { file } => lexicon_ops::info(&file),
        Command::Segment {
            lexicon_file,
            names,
        } => lexicon_ops::segment_names(&lexicon_file, &names),
        Command::Aliases {
            lexicon,
            native,
            full,
        } => alias_ops::aliases(lexicon.as_deref(), &native, &full),
        Command::Batch {
            lexicon,
            input,
            output,
        } => alias_ops::batch(lexicon.as_deref(), &input, &output),
        Command::Normalize { file } => alias_ops::normalize(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
