use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use romheb_cli::commands::{convert_ops, table_ops};
use romheb_core::OutputFormat;

#[derive(Parser)]
#[command(name = "romheb", about = "Romanized Hebrew transliteration tool")]
struct Cli {
    /// Log conversion passes to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert romanized text (arguments, or stdin lines when none are given)
    Convert {
        /// Romanized text to convert
        text: Vec<String>,
        /// Output format: unicode or html
        #[arg(short, long, default_value_t = OutputFormat::Unicode)]
        format: OutputFormat,
        /// Path to a custom table TOML (optional)
        #[arg(long)]
        table: Option<String>,
    },
    /// Show the finality rewrite and per-unit lookups for a string
    Explain {
        /// Romanized text to explain
        text: String,
        /// Path to a custom table TOML (optional)
        #[arg(long)]
        table: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Look up a single romanized token
    Lookup {
        /// Token spelling, e.g. "Shl" or ";3"
        token: String,
        /// Path to a custom table TOML (optional)
        #[arg(long)]
        table: Option<String>,
    },
    /// Print the built-in table as TOML
    TableExport,
    /// Validate a table TOML file
    TableValidate {
        /// Table TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("romheb_core=debug")),
            )
            .init();
    }

    match cli.command {
        Command::Convert {
            text,
            format,
            table,
        } => convert_ops::convert_cmd(&text, format, table.as_deref()),
        Command::Explain { text, table, json } => {
            convert_ops::explain_cmd(&text, table.as_deref(), json)
        }
        Command::Lookup { token, table } => convert_ops::lookup_cmd(&token, table.as_deref()),
        Command::TableExport => table_ops::table_export(),
        Command::TableValidate { file } => table_ops::table_validate(&file),
    }
}
