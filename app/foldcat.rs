//! Command-line interface for foldcat.
//!
//! Combines the text files of the configured target folders under a
//! directory into a single labeled file.

use clap::Parser;
use foldcat::{DEFAULT_OUTPUT, Event, FoldcatBuilder, foldcat_with};
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

/// foldcat — combine text files from specific folders into one file
#[derive(Parser)]
#[command(name = "foldcat", version, about, long_about = None)]
struct Cli {
    /// Directory to process (default current dir)
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Output file name
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let root = match std::path::absolute(&cli.directory) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: cannot resolve '{}': {}", cli.directory.display(), e);
            exit(1);
        }
    };
    if !root.is_dir() {
        eprintln!(
            "Error: The directory '{}' does not exist or is not a directory.",
            root.display()
        );
        exit(1);
    }

    let options = FoldcatBuilder::new(root).output(&cli.output).build();
    let result = foldcat_with(&options, |event| match event {
        Event::Included { .. } => {}
        other => println!("{}", other),
    });
    match result {
        Ok(summary) => {
            println!(
                "All text files from specified folders have been combined into '{}'.",
                cli.output.display()
            );
            println!(
                "Included {} example files from excluded patterns",
                summary.examples_selected
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
