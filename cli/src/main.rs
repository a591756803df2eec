//! chaintx CLI — classify transaction requests from the terminal.
//!
//! Usage:
//! ```bash
//! # Classify an inline transaction request
//! chaintx classify --tx '{"maxFeePerGas": 123, "maxPriorityFeePerGas": 456, "gatewayFee": 789}'
//!
//! # Classify one object or an array of objects from a file (or stdin with `-`)
//! chaintx classify --file txs.json --json
//!
//! # Check how a single field value is treated
//! chaintx empty --value '"0x00"'
//!
//! # List known variants
//! chaintx variants
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use chaintx_celo::CeloClassifier;
use chaintx_core::{Classification, FieldValue, TxRecord, TxVariant, VariantClassifier};

mod logging;

use logging::{init_tracing, LogConfig};

#[derive(Parser)]
#[command(
    name = "chaintx",
    about = "Detect the fee/format variant of a transaction request — ChainTx CLI",
    long_about = "
ChainTx CLI: decide whether a transaction request is legacy, EIP-1559,
Celo CIP-42 or Celo CIP-64 before it is encoded and signed.

ENVIRONMENT VARIABLES:
  CHAINTX_LOG    tracing filter directives (overrides --log-level)
",
    version
)]
struct Cli {
    /// Enable debug logging (same as --log-level debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level: trace | debug | info | warn | error
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Per-crate level override, e.g. `chaintx-celo=trace` (repeatable)
    #[arg(long = "log-component", global = true, value_name = "CRATE=LEVEL", value_parser = parse_component)]
    log_components: Vec<(String, String)>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a transaction request (JSON object) or an array of them
    Classify {
        /// Inline JSON transaction request
        #[arg(long, conflicts_with = "file")]
        tx: Option<String>,
        /// Path to a JSON file, or `-` for stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report whether a single JSON value counts as empty
    Empty {
        /// JSON value; bare words are treated as strings
        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },
    /// List the known transaction variants
    Variants,
}

impl Cli {
    fn log_config(&self) -> LogConfig {
        LogConfig {
            level: if self.verbose { "debug".into() } else { self.log_level.clone() },
            components: self.log_components.iter().cloned().collect(),
            json: self.log_json,
        }
    }
}

fn parse_component(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((krate, level)) if !krate.is_empty() && !level.is_empty() => {
            Ok((krate.to_string(), level.to_string()))
        }
        _ => Err(format!("expected CRATE=LEVEL, got `{raw}`")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_config());

    match cli.command {
        Commands::Classify { tx, file, json } => {
            let input = read_input(tx, file)?;
            let classified = classify_input(&input)?;
            if json {
                println!("{}", render_json(&classified)?);
            } else {
                for c in &classified.results {
                    println!("{}", render_text(c));
                }
            }
        }
        Commands::Empty { value } => {
            let v = parse_value(&value);
            tracing::debug!(kind = v.kind(), value = %v, "parsed field value");
            println!("{}", if v.is_empty() { "empty" } else { "present" });
        }
        Commands::Variants => {
            for v in TxVariant::ALL {
                println!("{:<8} {}", v.as_str(), render_type_byte(v.type_byte()));
            }
        }
    }
    Ok(())
}

fn read_input(tx: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (tx, file) {
        (Some(inline), _) => Ok(inline),
        (None, Some(path)) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            tracing::debug!(bytes = buf.len(), "read input from stdin");
            Ok(buf)
        }
        (None, Some(path)) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            tracing::debug!(path = %path.display(), bytes = content.len(), "read input file");
            Ok(content)
        }
        (None, None) => bail!("one of --tx or --file is required"),
    }
}

/// Classification results plus the shape of the input they came from.
#[derive(Debug)]
struct ClassifiedInput {
    /// Input was a JSON array (even a one-element one).
    from_array: bool,
    results: Vec<Classification>,
}

/// Classify a single JSON object or every element of a JSON array.
fn classify_input(input: &str) -> Result<ClassifiedInput> {
    let classifier = CeloClassifier::new();
    let value: serde_json::Value =
        serde_json::from_str(input).context("Input is not valid JSON")?;
    let (from_array, items) = match value {
        serde_json::Value::Array(items) => (true, items),
        single => (false, vec![single]),
    };
    tracing::debug!(count = items.len(), from_array, "classifying input");
    let results = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let tx = TxRecord::from_json_value(item)
                .with_context(|| format!("Invalid transaction at index {i}"))?;
            let c = classifier.classify(&tx);
            tracing::debug!(index = i, variant = %c.variant, "classified element");
            Ok(c)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(ClassifiedInput { from_array, results })
}

fn parse_value(raw: &str) -> FieldValue {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(v) => FieldValue::from_json(v),
        Err(_) => FieldValue::from(raw),
    }
}

fn render_type_byte(b: Option<u8>) -> String {
    match b {
        Some(b) => format!("0x{b:02x}"),
        None => "untyped".to_string(),
    }
}

fn render_text(c: &Classification) -> String {
    let matched: Vec<_> = c.matched.iter().map(|v| v.as_str()).collect();
    format!(
        "{c}\n  Matched:   {}\n  Type byte: {}\n  Forced:    {}",
        matched.join(", "),
        render_type_byte(c.type_byte()),
        if c.forced { "yes" } else { "no" },
    )
}

/// Arrays in, arrays out; a single object in, a single object out.
fn render_json(classified: &ClassifiedInput) -> Result<String> {
    let out = match (classified.from_array, classified.results.as_slice()) {
        (false, [single]) => serde_json::to_string_pretty(single),
        (_, many) => serde_json::to_string_pretty(many),
    };
    out.context("JSON serialization error")
}
