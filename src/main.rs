//! Name Categorizer: label a CSV column of customer names as Commercial or Retail
//!
//! Loads the names, trains the override classifier once on the batch,
//! classifies every non-missing name and writes the labels back.

use anyhow::Result;
use clap::Parser;
use name_categorizer::{
    classify_batch, load_config, load_names, train_classifier, Args, Label, LabelerConfig,
    NameLabeler, TrainingOutcome,
};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run_pipeline(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "labeling run failed");
            println!("An error occurred: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load, train, classify and write back
fn run_pipeline(args: &Args) -> Result<()> {
    let start_time = Instant::now();

    let config = match &args.config {
        Some(path) => load_config(Path::new(path))?,
        None => LabelerConfig::default(),
    };
    let labeler = NameLabeler::from_config(&config);

    if args.verbose {
        println!("Step 1: Loading names");
        println!("  Input file: {}", args.input);
    }
    let mut sheet = load_names(&args.input, args.column.as_deref())?;
    println!(
        "✓ Loaded {} rows from column '{}'",
        sheet.row_count(),
        sheet.column
    );

    if args.verbose {
        println!("\nStep 2: Training classifier");
        println!("  Keywords: {}", labeler.keywords().join(", "));
        println!("  Minimum samples: {}", config.min_samples);
    }
    let outcome = train_classifier(&sheet.names, &labeler, &config)?;
    match &outcome {
        TrainingOutcome::Available(classifier) => {
            println!("✓ Classifier trained");
            if let Some(accuracy) = classifier.holdout_accuracy() {
                println!("  Held-out agreement with keyword rule: {:.1}%", accuracy * 100.0);
            }
        }
        TrainingOutcome::Unavailable(reason) => {
            println!("✓ Keyword rule only: {}", reason);
        }
    }

    let labels = classify_batch(&sheet.names, &labeler, &outcome);
    let commercial = labels.iter().filter(|&&l| l == Label::Commercial).count();
    println!("\n=== Label Counts ===");
    println!("Commercial: {}", commercial);
    println!("Retail: {}", labels.len() - commercial);

    let output = args.output_path();
    sheet.write_labels(&args.header, &labels, Path::new(output))?;

    println!("\n=== Run Complete ===");
    println!("Updated file has been saved at: {}", output);
    println!("Total processing time: {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}
