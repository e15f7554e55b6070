//! Command-line interface definitions and argument parsing

use clap::Parser;

/// Label customer names as Commercial or Retail
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input CSV file
    #[arg(short, long, default_value = "data.csv")]
    pub input: String,

    /// Header of the name column (default: first column)
    #[arg(short, long)]
    pub column: Option<String>,

    /// Header of the label column to write
    #[arg(long, default_value = "Category")]
    pub header: String,

    /// Output path (default: overwrite the input file)
    #[arg(short, long)]
    pub output: Option<String>,

    /// JSON file overriding keywords, thresholds and model parameters
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Where the labeled table is written
    pub fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or(&self.input)
    }
}
