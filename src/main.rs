//! CLI entry point for `mimefield`.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use mimefield::config::{self, Config, OutputFormat};
use mimefield::parser::header::FieldOutcome;
use mimefield::{parse_field, parse_header_block, ParsedField};

#[derive(Parser)]
#[command(
    name = "mimefield",
    version,
    about = "Parse structured MIME header fields"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single header value (read from stdin when VALUE is omitted)
    Field {
        /// Header name, e.g. Content-Type
        name: String,
        value: Option<String>,
    },
    /// Parse every recognized field of a raw header block ("-" for stdin)
    Headers {
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = config::load_config();

    let log_level = match cli.verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    setup_logging(log_level);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    match cli.command {
        Commands::Field { name, value } => cmd_field(&name, value, format, &config),
        Commands::Headers { path } => cmd_headers(&path, format, &config),
    }
}

/// Set up tracing with stderr output.
fn setup_logging(level: &str) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

/// Parse one header value and print it.
fn cmd_field(
    name: &str,
    value: Option<String>,
    format: OutputFormat,
    config: &Config,
) -> anyhow::Result<()> {
    let value = match value {
        Some(v) => v,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let Some(parsed) = parse_field(name, Some(&value))? else {
        anyhow::bail!("No parser for header field '{name}'");
    };

    match format {
        OutputFormat::Json => print_json(&parsed, config)?,
        OutputFormat::Text => print_field_text(name, &parsed),
    }
    Ok(())
}

/// Parse a header block from a file or stdin and print every recognized field.
fn cmd_headers(path: &Path, format: OutputFormat, config: &Config) -> anyhow::Result<()> {
    let data = if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        if !path.exists() {
            anyhow::bail!("File not found: {}", path.display());
        }
        std::fs::read(path)?
    };

    let outcomes = parse_header_block(&data);
    tracing::info!(fields = outcomes.len(), "Parsed header block");

    match format {
        OutputFormat::Json => {
            let items: Vec<serde_json::Value> = outcomes.iter().map(outcome_json).collect();
            print_json(&items, config)?;
        }
        OutputFormat::Text => {
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(parsed) => print_field_text(&outcome.name, parsed),
                    Err(e) => println!("{}: <error: {e}>", outcome.name),
                }
            }
        }
    }
    Ok(())
}

fn outcome_json(outcome: &FieldOutcome) -> serde_json::Value {
    match &outcome.result {
        Ok(parsed) => serde_json::json!({
            "name": outcome.name,
            "raw": outcome.raw,
            "parsed": parsed,
        }),
        Err(e) => serde_json::json!({
            "name": outcome.name,
            "raw": outcome.raw,
            "error": e.to_string(),
        }),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T, config: &Config) -> anyhow::Result<()> {
    let out = if config.output.pretty_json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

/// Human-readable listing of a parsed field.
fn print_field_text(name: &str, parsed: &ParsedField) {
    println!("{name}: {parsed}");
    match parsed {
        ParsedField::ContentType(ct) => {
            println!("  media type: {}", ct.media_type);
            if let Some(ref b) = ct.boundary {
                println!("  boundary:   {b}");
            }
            if let Some(ref c) = ct.charset {
                println!("  charset:    {c}");
            }
            if let Some(ref n) = ct.name {
                println!("  name:       {n}");
            }
            for (k, v) in &ct.parameters {
                println!("  {k}: {v}");
            }
        }
        ParsedField::ContentDisposition(cd) => {
            println!("  type:       {}", cd.disposition_type);
            if let Some(ref f) = cd.file_name {
                println!("  filename:   {f}");
            }
            if let Some(size) = cd.size {
                println!("  size:       {size}");
            }
            let dates = [
                ("created", &cd.creation_date),
                ("modified", &cd.modification_date),
                ("read", &cd.read_date),
            ];
            for (label, date) in dates {
                if let Some(d) = date {
                    println!("  {label:<10}  {}", d.format("%Y-%m-%d %H:%M:%S"));
                }
            }
            for (k, v) in &cd.parameters {
                println!("  {k}: {v}");
            }
        }
        ParsedField::Identifiers(ids) => {
            for id in ids {
                println!("  {id}");
            }
        }
        _ => {}
    }
}
