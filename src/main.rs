use std::fs;
use std::io::{self, BufRead};

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use shamir::cli::{Cli, Commands};
use shamir::commands::{self, SecretSource};
use shamir::domain::SplitConfig;

/// Read a secret from stdin (hidden input when TTY available)
fn read_secret() -> Result<Zeroizing<Vec<u8>>> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter secret:");
        let secret = Zeroizing::new(
            rpassword::read_password().context("Failed to read secret from stdin")?,
        );
        Ok(Zeroizing::new(secret.as_bytes().to_vec()))
    } else {
        // Piped input: one line, newline included
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        let mut secret = Zeroizing::new(Vec::new());
        handle
            .read_until(b'\n', &mut secret)
            .context("Failed to read secret from stdin")?;
        Ok(secret)
    }
}

/// Read share file paths from stdin, one per line, until EOF or an empty line
fn read_share_paths() -> Result<Vec<String>> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter share file paths (one per line, empty line to finish):");
    }

    let mut paths = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read line from stdin")?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            break;
        }

        paths.push(trimmed.to_string());
    }

    if paths.is_empty() {
        bail!("No share files provided");
    }

    Ok(paths)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Split {
            parts,
            threshold,
            output_dir,
            input,
        } => {
            let config = SplitConfig::new(threshold, parts)?;

            let secret = match commands::resolve_secret_input(input.as_deref()) {
                SecretSource::Stdin => read_secret()?,
                source => commands::load_secret(&source)?,
            };

            let paths = commands::split_to_files(&secret, config, &output_dir, &mut OsRng)?;
            for (idx, path) in paths.iter().enumerate() {
                println!("Share {} written to {}", idx + 1, path.display());
            }
        }
        Commands::Combine { output, shares } => {
            let paths = if shares.is_empty() {
                read_share_paths()?
            } else {
                shares
            };

            let secret = commands::combine_files(&paths)?;
            match output {
                Some(path) => {
                    fs::write(&path, secret.as_slice()).with_context(|| {
                        format!("Failed to write recovered secret to {}", path.display())
                    })?;
                    println!("Recovered secret written to {}", path.display());
                }
                None => {
                    commands::write_recovered_secret(&mut io::stdout().lock(), &secret)
                        .context("Failed to write recovered secret to stdout")?;
                }
            }
        }
    }

    Ok(())
}
