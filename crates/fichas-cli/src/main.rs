mod commands;
mod output;

use clap::{Parser, Subcommand};
use fichas_core::{DEFAULT_MAX_FILE_BYTES, DEFAULT_MIN_TEXT_CHARS};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fichas",
    version,
    about = "Extract ficha fields from aid program documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract ficha fields from a .docx document (or already-converted .txt)
    Extract {
        /// Path to the .docx or .txt file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the draft as JSON to a file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Worker directory (JSON array of {"id", "name"}) used to resolve the drafter
        #[arg(short, long, value_name = "FILE", env = "FICHAS_WORKERS")]
        workers: Option<PathBuf>,

        /// Custom territorial cue table (default: builtin "es")
        #[arg(short, long, value_name = "FILE", env = "FICHAS_CUES")]
        cues: Option<PathBuf>,

        /// Minimum number of characters the document text must have
        #[arg(long, default_value_t = DEFAULT_MIN_TEXT_CHARS, env = "FICHAS_MIN_CHARS")]
        min_chars: usize,

        /// Maximum accepted file size in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_FILE_BYTES, env = "FICHAS_MAX_BYTES")]
        max_bytes: u64,
    },
    /// Show how the territorial scope of a document is scored
    Scope {
        /// Path to the .docx or .txt file
        input_file: PathBuf,

        /// Custom territorial cue table (default: builtin "es")
        #[arg(short, long, value_name = "FILE", env = "FICHAS_CUES")]
        cues: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Manage and inspect cue tables
    Cues {
        #[command(subcommand)]
        action: CuesAction,
    },
}

#[derive(Subcommand)]
enum CuesAction {
    /// List predefined cue tables
    List,
    /// Print the patterns and gazetteer of a cue table
    Explain {
        /// Preset name (e.g., "es")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom cue table file
    Validate {
        /// Path to JSON cue table file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
            workers,
            cues,
            min_chars,
            max_bytes,
        } => commands::extract::run(commands::extract::ExtractArgs {
            input_file,
            output_format: output,
            out,
            workers,
            cues,
            min_chars,
            max_bytes,
        }),
        Commands::Scope {
            input_file,
            cues,
            output,
        } => commands::scope::run(input_file, cues, &output),
        Commands::Cues { action } => match action {
            CuesAction::List => commands::cues::list(),
            CuesAction::Explain { preset } => commands::cues::explain(&preset),
            CuesAction::Schema => commands::cues::schema(),
            CuesAction::Validate { file } => commands::cues::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
