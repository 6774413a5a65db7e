//! Fieldmask CLI - Field selection for JSON documents
//!
//! This binary provides command-line interfaces for:
//! - apply: filter a JSON document with include/exclude/explicit selectors
//! - parse: show the normalized path list for a selector string
//! - check: report listed field names that are absent from a document

use clap::{Parser, Subcommand};
use fieldmask_core::parse_field_list;
use fieldmask_filter::{FilterConfig, FilterOptions};
use serde_json::Value;
use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code for a structurally valid run whose result is fully excluded.
const EXIT_FULLY_EXCLUDED: u8 = 2;

#[derive(Parser)]
#[command(name = "fieldmask")]
#[command(about = "Field selection for JSON API responses")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a JSON document with include/exclude selectors
    ///
    /// Examples:
    ///   fieldmask apply response.json --include "user(name, address.city)"
    ///   cat response.json | fieldmask apply --exclude "user.password"
    Apply {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,
        /// Inclusion selector (the `Attributes` header value)
        #[arg(long)]
        include: Option<String>,
        /// Exclusion selector (the `Attributes-Excluded` header value)
        #[arg(long)]
        exclude: Option<String>,
        /// EXPLICIT field names as dotted paths (repeatable or comma-separated)
        #[arg(long = "explicit", value_delimiter = ',')]
        explicit: Vec<String>,
        /// Print the result on one line instead of pretty-printing
        #[arg(long)]
        compact: bool,
    },
    /// Print the normalized path list for a selector string
    ///
    /// Examples:
    ///   fieldmask parse "a(b, c.d)"
    ///   fieldmask parse "A(*, B.X)"
    Parse {
        /// Selector text in the field-list grammar
        selector: String,
    },
    /// Report listed field names absent from a document
    ///
    /// Unknown names are inert during filtering; this surfaces them for
    /// callers that want to reject such selectors with a client error.
    Check {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,
        /// Inclusion selector to check
        #[arg(long)]
        include: Option<String>,
        /// Exclusion selector to check
        #[arg(long)]
        exclude: Option<String>,
        /// EXPLICIT field names to check
        #[arg(long = "explicit", value_delimiter = ',')]
        explicit: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Apply {
            input,
            include,
            exclude,
            explicit,
            compact,
        } => handle_apply(input, include, exclude, explicit, compact),
        Commands::Parse { selector } => handle_parse(&selector),
        Commands::Check {
            input,
            include,
            exclude,
            explicit,
        } => handle_check(input, include, exclude, explicit),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn handle_apply(
    input: Option<PathBuf>,
    include: Option<String>,
    exclude: Option<String>,
    explicit: Vec<String>,
    compact: bool,
) -> Result<ExitCode, Box<dyn Error>> {
    let config = FilterConfig::new(&FilterOptions {
        include,
        exclude,
        explicit_fields: explicit,
    })?;
    let document = read_document(input.as_deref())?;

    match config.apply(&document) {
        Some(filtered) => {
            if compact {
                println!("{}", serde_json::to_string(&filtered)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&filtered)?);
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("result is fully excluded");
            Ok(ExitCode::from(EXIT_FULLY_EXCLUDED))
        }
    }
}

fn handle_parse(selector: &str) -> Result<ExitCode, Box<dyn Error>> {
    let paths = parse_field_list(selector)?;
    for path in paths {
        println!("{}", path);
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_check(
    input: Option<PathBuf>,
    include: Option<String>,
    exclude: Option<String>,
    explicit: Vec<String>,
) -> Result<ExitCode, Box<dyn Error>> {
    let config = FilterConfig::new(&FilterOptions {
        include,
        exclude,
        explicit_fields: explicit,
    })?;
    let document = read_document(input.as_deref())?;

    let mut known = HashSet::new();
    let mut path = Vec::new();
    collect_known_paths(&document, &mut path, &mut known);

    let listed = config
        .include_paths()
        .iter()
        .chain(config.exclude_paths())
        .chain(config.explicit_paths());

    let mut unknown = Vec::new();
    let mut seen = HashSet::new();
    for path in listed {
        // A wildcard selects children of its stem, so the stem is the
        // name that has to exist.
        let segments = path.segments().to_vec();
        if !known.contains(&segments) && seen.insert(segments) {
            unknown.push(path.to_string());
        }
    }

    if unknown.is_empty() {
        println!("all listed fields are present");
        Ok(ExitCode::SUCCESS)
    } else {
        for name in &unknown {
            eprintln!("unknown field: {}", name);
        }
        Ok(ExitCode::FAILURE)
    }
}

/// Record every object-key path reachable in `value`; arrays are
/// transparent, mirroring the evaluator's path model.
fn collect_known_paths(value: &Value, path: &mut Vec<String>, known: &mut HashSet<Vec<String>>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                path.push(key.clone());
                known.insert(path.clone());
                collect_known_paths(child, path, known);
                path.pop();
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_known_paths(item, path, known);
            }
        }
        _ => {}
    }
}

fn read_document(input: Option<&std::path::Path>) -> Result<Value, Box<dyn Error>> {
    let text = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(serde_json::from_str(&text)?)
}
