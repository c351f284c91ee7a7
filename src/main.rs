mod cli;
mod error;
mod input_spec;
mod merge;
mod page_range;
mod pdf;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let summary = merge::run(&cli.inputs, &cli.output)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if !cli.quiet {
        println!(
            "Merged {} page(s) from {} file(s) into {}",
            summary.total_pages,
            summary.inputs.len(),
            summary.output.display()
        );
    }

    Ok(())
}
