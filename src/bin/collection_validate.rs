//! Validate a generated collection against the bundled structural schema.
//!
//! Usage:
//!   collection-validate --file DailyDose_API_Collection.postman_collection.json
//!   collection-validate < collection.json

use anyhow::{Context, Result};
use clap::Parser;
use dosegen::{CollectionSchema, default_schema_path, find_repo_root};
use serde_json::Value;
use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "collection-validate")]
#[command(about = "Validate a Postman collection against the bundled schema")]
struct Cli {
    /// Optional input file; reads stdin when omitted.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Optional schema path override.
    #[arg(long)]
    schema: Option<PathBuf>,
}

fn read_input(file: Option<PathBuf>) -> Result<Value> {
    let mut buf = String::new();
    if let Some(path) = file {
        File::open(&path)
            .with_context(|| format!("opening input file {}", path.display()))?
            .read_to_string(&mut buf)
            .with_context(|| format!("reading input file {}", path.display()))?;
    } else {
        stdin()
            .read_to_string(&mut buf)
            .context("reading stdin for input JSON")?;
    }
    let value: Value = serde_json::from_str(&buf).context("parsing input JSON")?;
    Ok(value)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let schema_path = match cli.schema {
        Some(path) => path,
        None => default_schema_path(&find_repo_root().context("locating repository root")?),
    };

    let schema = CollectionSchema::load(&schema_path)?;
    let input = read_input(cli.file)?;
    schema.validate(&input)?;

    println!("collection is valid");
    Ok(())
}
