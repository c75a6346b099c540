use anyhow::{Context, Result};
use clap::Parser;
use corpus_fix::normalizer::{normalize_file, NormalizeReport, NormalizerConfig};
use corpus_fix::paths;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "basmalah-fix")]
#[command(about = "Split the Basmalah from the first verse of each surah with a line break")]
#[command(version)]
struct Args {
    /// Corpus JSON to read (never modified)
    #[arg(long, default_value = paths::CORPUS_PATH)]
    input: PathBuf,

    /// Where to write the fixed corpus [default: <input stem>_fixed.json]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also write the list of modifications as JSON to this path
    #[arg(long)]
    report_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    // WHY: logs go to stderr so stdout carries only the operator report
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let mut config = NormalizerConfig::for_input(args.input);
    if let Some(output) = args.output {
        config.output = output;
    }

    println!("Searching for first verses to fix in {}", config.input.display());
    let report = normalize_file(&config)?;

    print_report(&report);

    if let Some(report_path) = args.report_out {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&report_path, json)
            .with_context(|| format!("Failed to write report {}", report_path.display()))?;
        info!("Wrote modification report to {}", report_path.display());
    }

    if report.is_empty() {
        println!("No verse needed changes.");
    } else {
        println!();
        println!("Fixed corpus saved: {}", config.output.display());
        println!("Review the changes before replacing the original file.");
    }

    Ok(())
}

fn print_report(report: &NormalizeReport) {
    for m in &report.modifications {
        println!("Surah {}:", m.surah);
        println!("  Old: {}", m.old_text);
        println!("  New: {}", m.new_text);
        println!();
    }

    println!("Modified surahs: {:?}", report.modified_surahs());
    println!("Total verses modified: {}", report.modified_count());
}
