//! Generate the DailyDose Postman collection from the endpoint catalog.
//!
//! Usage:
//!   dosegen
//!   dosegen --catalog catalogs/dailydose_v1.json --out collection.json
//!   dosegen --stdout

use anyhow::{Context, Result};
use clap::Parser;
use dosegen::{
    DEFAULT_OUTPUT_FILE, build_collection, default_catalog_path, find_repo_root,
    load_catalog_from_path,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dosegen")]
#[command(about = "Generate the DailyDose Postman collection from the endpoint catalog")]
struct Cli {
    /// Optional catalog path; defaults to catalogs/dailydose_v1.json under the repo root.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Output file, written to the working directory by default.
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    out: PathBuf,
    /// Print the collection to stdout instead of writing a file.
    #[arg(long)]
    stdout: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let catalog_path = match cli.catalog {
        Some(path) => path,
        None => default_catalog_path(&find_repo_root().context("locating repository root")?),
    };

    let catalog = load_catalog_from_path(&catalog_path)?;
    let collection = build_collection(&catalog)?;
    let rendered =
        serde_json::to_string_pretty(&collection).context("serializing collection")?;

    if cli.stdout {
        println!("{rendered}");
        return Ok(());
    }

    fs::write(&cli.out, rendered)
        .with_context(|| format!("writing collection to {}", cli.out.display()))?;

    println!("Postman collection written to {}", cli.out.display());
    println!("Folders: {}", collection.item.len());
    println!("Requests: {}", collection.request_count());
    Ok(())
}
