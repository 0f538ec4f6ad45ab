use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use schema_href_core::{
    canonicalize_path, BaseLocation, ErrorCode, ReferenceKind, ResolveOptions, SchemeCheck,
};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "schema-href")]
#[command(about = "Resolve schema import/include references against a base location")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// How strictly the base location's scheme is checked
    #[arg(long, value_enum, global = true, default_value_t = SchemeCheckArg::Prefix)]
    scheme_check: SchemeCheckArg,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one or more references against a base location
    Resolve {
        /// Absolute base location (the document containing the references)
        base: String,

        /// References to resolve (pass ones starting with `-` after `--`)
        #[arg(required = true)]
        references: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = ResolveFormat::Text)]
        format: ResolveFormat,
    },

    /// Remove `.` and `..` segments from a path
    Canonicalize {
        /// Path to canonicalize
        path: String,
    },

    /// Resolve a JSON array of `{"base", "reference"}` pairs
    Batch {
        /// Input JSON file (`-` reads stdin)
        input: PathBuf,

        /// Output JSON file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum SchemeCheckArg {
    Prefix,
    Strict,
}

impl From<SchemeCheckArg> for SchemeCheck {
    fn from(val: SchemeCheckArg) -> Self {
        match val {
            SchemeCheckArg::Prefix => SchemeCheck::Prefix,
            SchemeCheckArg::Strict => SchemeCheck::Strict,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum ResolveFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    Pretty,
    Compact,
}

#[derive(Serialize)]
struct Resolved<'a> {
    reference: &'a str,
    kind: ReferenceKind,
    resolved: String,
}

#[derive(Deserialize)]
struct BatchEntry {
    base: String,
    #[serde(default)]
    reference: String,
}

#[derive(Serialize)]
struct BatchResult {
    base: String,
    reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ReferenceKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<ErrorCode>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for piping
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let options = ResolveOptions::with_scheme_check(cli.scheme_check.into());

    match cli.command {
        Commands::Resolve {
            base,
            references,
            format,
        } => {
            let base = BaseLocation::parse(&base, options.scheme_check)
                .context("Invalid base location")?;

            let results: Vec<Resolved<'_>> = references
                .iter()
                .map(|reference| Resolved {
                    reference,
                    kind: ReferenceKind::classify(reference),
                    resolved: base.resolve(reference),
                })
                .collect();

            match format {
                ResolveFormat::Text => {
                    let mut out = BufWriter::new(io::stdout().lock());
                    for result in &results {
                        writeln!(out, "{}", result.resolved).context("Failed to write output")?;
                    }
                    out.flush().context("Failed to write output")?;
                }
                ResolveFormat::Json => write_json(&results, None, OutputFormat::Pretty)?,
            }
        }
        Commands::Canonicalize { path } => {
            println!("{}", canonicalize_path(&path));
        }
        Commands::Batch {
            input,
            output,
            format,
        } => {
            let entries = read_batch(&input)?;
            tracing::debug!(count = entries.len(), "resolving batch");

            let results: Vec<BatchResult> = entries
                .into_iter()
                .map(|entry| resolve_entry(entry, &options))
                .collect();

            let failures = results.iter().filter(|r| r.error.is_some()).count();
            if failures > 0 {
                eprintln!("Warning: {failures} entries had an invalid base location");
            }

            write_json(&results, output.as_ref(), format)?;
        }
    }

    Ok(())
}

fn read_batch(input: &Path) -> Result<Vec<BatchEntry>> {
    if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read batch from stdin")?;
        return serde_json::from_str(&buf).context("Failed to parse batch from stdin");
    }

    let file = File::open(input)
        .with_context(|| format!("Failed to open input file: {}", input.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse batch from: {}", input.display()))
}

fn resolve_entry(entry: BatchEntry, options: &ResolveOptions) -> BatchResult {
    let BatchEntry { base, reference } = entry;
    match BaseLocation::parse(&base, options.scheme_check) {
        Ok(location) => {
            let kind = ReferenceKind::classify(&reference);
            let resolved = location.resolve(&reference);
            BatchResult {
                base,
                reference,
                kind: Some(kind),
                resolved: Some(resolved),
                error: None,
                code: None,
            }
        }
        Err(err) => BatchResult {
            error: Some(err.to_string()),
            code: Some(err.error_code()),
            base,
            reference,
            kind: None,
            resolved: None,
        },
    }
}

fn write_json<T: serde::Serialize>(
    val: &T,
    path: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let mut writer: Box<dyn Write> = if let Some(p) = path {
        let file = File::create(p)
            .with_context(|| format!("Failed to create output file: {}", p.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    match format {
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut writer, val).context("Failed to write JSON")?;
        }
        OutputFormat::Compact => {
            serde_json::to_writer(&mut writer, val).context("Failed to write JSON")?;
        }
    }

    writeln!(writer).context("Failed to write trailing newline")?;
    writer.flush().context("Failed to flush output")?;

    Ok(())
}
