#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the concession field auto-calculation tooling.
//!
//! Thin wrapper over [`concession_map_enrich`]: reads concession records
//! from JSON, fills in the derived `size`/`district`/`region` fields, and
//! writes the enriched records back out. Persistence stays with whatever
//! backend consumes the output.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use concession_map_concession_models::Concession;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "concession_map_cli", about = "Concession field calculation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enrich concession records from a JSON file (a single object or an
    /// array of objects) with derived size/district/region fields
    Enrich {
        /// Path to the input JSON file
        input: PathBuf,
        /// Write the enriched JSON here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Run one calculation over a bare coordinate ring (JSON array of
    /// [lon, lat] pairs) and print the result
    Calculate {
        /// Path to a JSON file holding the coordinate ring
        coordinates: PathBuf,
    },
    /// Print the built-in administrative boundary gazetteer as JSON
    Gazetteer,
}

/// Errors surfaced by the CLI input handling.
#[derive(Debug, Error)]
enum CliError {
    /// File read/write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input file held neither a concession object nor an array of
    /// them.
    #[error("expected a concession object or an array of concessions in {path}")]
    UnexpectedShape {
        /// Offending input path.
        path: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Enrich {
            input,
            output,
            pretty,
        } => enrich(&input, output.as_deref(), pretty)?,
        Commands::Calculate { coordinates } => calculate(&coordinates)?,
        Commands::Gazetteer => {
            let json = serde_json::to_string_pretty(concession_map_gazetteer::GHANA_GAZETTEER)?;
            println!("{json}");
        }
    }

    Ok(())
}

fn enrich(input: &Path, output: Option<&Path>, pretty: bool) -> Result<(), CliError> {
    let raw = fs::read_to_string(input)?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;

    let enriched = match value {
        serde_json::Value::Array(items) => {
            let records = items
                .into_iter()
                .map(serde_json::from_value::<Concession>)
                .collect::<Result<Vec<_>, _>>()?;
            log::info!("enriching {} concession record(s)", records.len());

            let enriched: Vec<Concession> = records
                .into_iter()
                .map(concession_map_enrich::auto_calculate_fields)
                .collect();
            serde_json::to_value(enriched)?
        }
        serde_json::Value::Object(_) => {
            let record: Concession = serde_json::from_value(value)?;
            log::info!("enriching concession record {}", record.id);
            serde_json::to_value(concession_map_enrich::auto_calculate_fields(record))?
        }
        _ => {
            return Err(CliError::UnexpectedShape {
                path: input.display().to_string(),
            });
        }
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&enriched)?
    } else {
        serde_json::to_string(&enriched)?
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)?;
            log::info!("wrote enriched records to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn calculate(coordinates: &Path) -> Result<(), CliError> {
    let raw = fs::read_to_string(coordinates)?;
    let ring: Vec<[f64; 2]> = serde_json::from_str(&raw)?;

    let result = concession_map_enrich::calculate_fields(&ring);
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
