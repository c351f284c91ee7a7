use clap::Parser;
use std::path::PathBuf;

use crate::input_spec::InputSpec;

#[derive(Parser)]
#[command(name = "pdfcat")]
#[command(about = "Merge PDFs with optional page ranges")]
#[command(after_help = "Format: input1.pdf[:1-3,5] input2.pdf[:2-4] ...")]
#[command(version)]
pub struct Cli {
    /// Input PDF files, optionally with page ranges (e.g., "doc.pdf:1-3,5")
    #[arg(required = true)]
    pub inputs: Vec<InputSpec>,

    /// Output file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Print a JSON summary instead of the confirmation line
    #[arg(long)]
    pub json: bool,

    /// Log debug details to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors and skip the confirmation line
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
