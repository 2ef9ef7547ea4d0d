use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{ShareCount, Threshold};

/// Validates that threshold is at least 2
/// A threshold of 1 defeats the purpose of Shamir Secret Sharing
/// (any single share would be able to recover the entire secret)
fn validate_threshold(s: &str) -> Result<Threshold, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Threshold::new(value).map_err(|e| e.to_string())
}

fn validate_parts(s: &str) -> Result<ShareCount, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    ShareCount::new(value).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "shamir")]
#[command(about = "Split a secret into Shamir Secret Shares and combine them back")]
pub struct Cli {
    /// Log progress to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a secret into share files
    Split {
        /// Number of shares to create (2-255)
        #[arg(short, long, default_value = "2", value_parser = validate_parts)]
        parts: ShareCount,

        /// Threshold: minimum number of shares needed to reconstruct (must be >= 2)
        #[arg(short, long, default_value = "2", value_parser = validate_threshold)]
        threshold: Threshold,

        /// Directory the share files are written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// A file holding the secret, or the secret itself; read from stdin if omitted
        input: Option<String>,
    },
    /// Combine share files to recover the secret
    Combine {
        /// Write the recovered secret to this file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Share files; paths are read from stdin (one per line) if omitted
        shares: Vec<String>,
    },
}
