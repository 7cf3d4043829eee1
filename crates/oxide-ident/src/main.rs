//! oxide-ident CLI
//!
//! Command-line tool for checking schema-qualified SQL identifiers.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_ident::input::read_file;
use oxide_ident::{check, resolve_config, OutputFormat};
use oxide_ident_core::IdentifierParser;

/// Checks whether strings are `[schema.]name` identifiers.
#[derive(Parser)]
#[command(name = "oxide-ident")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Identifiers to check.
    inputs: Vec<String>,

    /// Read identifiers from a file, one per line (`-` for stdin).
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Dialect preset supplying the delimiters (generic, mysql, sqlite).
    #[arg(short, long, env = "OXIDE_IDENT_DIALECT", default_value = "generic")]
    dialect: String,

    /// Identifier quote character, overriding the dialect.
    #[arg(short, long, env = "OXIDE_IDENT_QUOTE")]
    quote: Option<char>,

    /// Schema separator character, overriding the dialect.
    #[arg(short, long, env = "OXIDE_IDENT_SEPARATOR")]
    separator: Option<char>,

    /// Print one JSON object per input.
    #[arg(long)]
    json: bool,

    /// Enable verbose output (repeat for automaton traces).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = resolve_config(&cli.dialect, cli.quote, cli.separator)?;
    let parser = IdentifierParser::new(config);

    let mut inputs = cli.inputs;
    if let Some(path) = &cli.file {
        inputs.extend(read_file(path)?);
    }
    if inputs.is_empty() {
        info!("No identifiers given. Pass them as arguments or use --file.");
        return Ok(());
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let reports = check(&parser, &inputs);
    let mut stdout = io::stdout().lock();
    for report in &reports {
        writeln!(stdout, "{}", report.render(format)?)?;
    }

    let matched = reports.iter().filter(|r| r.outcome.is_success()).count();
    info!("{matched} of {} identifiers matched", reports.len());

    Ok(())
}
