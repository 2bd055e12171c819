//! threadbare-import - Load a closet export JSON file into the database

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use threadbare_core::{import_file, Config, Database};

#[derive(Parser, Debug)]
#[command(name = "threadbare-import")]
#[command(about = "Import a closet export into the wardrobe database")]
#[command(version)]
struct Args {
    /// Closet export JSON file
    file: PathBuf,

    /// User to import the items under
    #[arg(long)]
    user: String,

    /// Database path (default: from config)
    #[arg(long)]
    db: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = threadbare_core::logging::init(&config.logging).ok();

    let db_path = args.db.clone().unwrap_or_else(|| config.database_path());
    let db = Database::open(&db_path).context("failed to open database")?;
    db.migrate().context("failed to run migrations")?;

    let result = import_file(&db, &args.user, &args.file)
        .with_context(|| format!("failed to import {}", args.file.display()))?;

    println!("Imported for user '{}':", args.user);
    println!("   {} items", result.items_imported);
    println!("   {} outfits", result.outfits_imported);
    println!("   {} wear log entries", result.wear_entries_imported);
    if result.skipped > 0 {
        println!("   {} records skipped (missing id or name)", result.skipped);
    }

    Ok(())
}
