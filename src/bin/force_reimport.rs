// Force the app to re-import the Quran corpus by deleting its local Isar database
// Run from the Flutter project root so the project-local roots resolve

use anyhow::Result;
use clap::Parser;
use corpus_fix::invalidator::{invalidate, InvalidatorConfig};
use corpus_fix::paths;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "force-reimport")]
#[command(about = "Delete cached Isar databases so the app re-imports the corpus")]
#[command(version)]
struct Args {
    /// Directory to scan instead of the built-in locations (repeatable)
    #[arg(long = "root")]
    roots: Vec<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let mut config = InvalidatorConfig::default();
    if !args.roots.is_empty() {
        config.roots = args.roots;
    }

    println!("Forcing re-import of the Quran corpus");
    println!("{}", "=".repeat(50));

    let report = invalidate(&config);

    if report.deleted.is_empty() {
        println!("\nNo Isar cache found.");
    } else {
        println!("\n{} file(s)/folder(s) deleted:", report.deleted.len());
        for path in &report.deleted {
            println!("   - {}", path.display());
        }
    }

    if !report.failures.is_empty() {
        println!("\n{} deletion(s) failed:", report.failures.len());
        for failure in &report.failures {
            println!("   - {}: {}", failure.path.display(), failure.message);
        }
    }

    println!("\nNext steps:");
    println!("1. Launch the app: flutter run");
    println!("2. The app detects the missing data on startup");
    println!("3. It re-imports {}", paths::CORPUS_PATH);
    println!("\nThe corpus import can also be forced from Settings > Corpus import");

    Ok(())
}
