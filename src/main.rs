use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use javafy::{Config, JavafyError, REFERENCE_TEXT};

/// Rewrite Java-style constant declarations
#[derive(Parser)]
#[command(name = "javafy")]
#[command(version)]
struct Cli {
    /// YAML file overriding the rewrite and decorate rules
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Replace "public final" with "public static final"
    Rewrite {
        /// Input file (defaults to the embedded catalog)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Wrap every line as a "public final static String" declaration
    Decorate {
        /// Input file (defaults to the embedded catalog)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn read_input(input: Option<&Path>) -> Result<String, JavafyError> {
    match input {
        Some(path) => fs::read_to_string(path).map_err(|source| JavafyError::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(REFERENCE_TEXT.to_string()),
    }
}

fn run(cli: Cli) -> Result<(), JavafyError> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let output = match cli.command {
        None => javafy::rewrite_reference_with(&config.rewrite),
        Some(Command::Rewrite { input }) => config.rewrite.apply(&read_input(input.as_deref())?),
        Some(Command::Decorate { input }) => config.decorate.apply(&read_input(input.as_deref())?),
    };

    // Single write, newline-terminated like a print call
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
