use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::{debug, info};
use zeroize::Zeroizing;

use crate::domain::SplitConfig;
use crate::random::RandomSource;
use crate::sharing;

/// Where the secret for a split comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    /// An existing regular file; its contents are the secret
    File(PathBuf),
    /// The argument itself is the secret
    Literal(String),
    /// Nothing was given; read from stdin
    Stdin,
}

/// Decides how to interpret the optional positional split argument
///
/// A path to an existing regular file wins over treating the text as the secret.
#[must_use]
pub fn resolve_secret_input(arg: Option<&str>) -> SecretSource {
    match arg {
        None => SecretSource::Stdin,
        Some(value) if Path::new(value).is_file() => SecretSource::File(PathBuf::from(value)),
        Some(value) => SecretSource::Literal(value.to_string()),
    }
}

/// Loads the secret for file and literal sources
///
/// # Errors
/// Returns an error if the file cannot be read, or if called with [`SecretSource::Stdin`]
pub fn load_secret(source: &SecretSource) -> Result<Zeroizing<Vec<u8>>> {
    match source {
        SecretSource::File(path) => {
            let bytes = fs::read(path)
                .with_context(|| format!("Failed to read secret from {}", path.display()))?;
            Ok(Zeroizing::new(bytes))
        }
        SecretSource::Literal(text) => Ok(Zeroizing::new(text.as_bytes().to_vec())),
        SecretSource::Stdin => bail!("Stdin secrets must be read by the caller"),
    }
}

/// File name for the 1-based share number `number`
#[must_use]
pub fn share_file_name(number: usize) -> String {
    format!("share_{number}.txt")
}

/// Path for share `number` inside `dir`
///
/// The current directory yields the bare file name.
#[must_use]
pub fn share_path(dir: &Path, number: usize) -> PathBuf {
    let name = share_file_name(number);
    if dir == Path::new(".") {
        PathBuf::from(name)
    } else {
        dir.join(name)
    }
}

/// Writes `Recovered secret: ` followed by the raw secret bytes and a newline
///
/// # Errors
/// Returns an error if writing to `out` fails
pub fn write_recovered_secret<W: Write>(out: &mut W, secret: &[u8]) -> io::Result<()> {
    out.write_all(b"Recovered secret: ")?;
    out.write_all(secret)?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Split a secret and write each share to `dir/share_<n>.txt`
///
/// All shares are computed before any file is written, so invalid input never
/// leaves partial output behind.
///
/// Returns the paths written, in share order.
///
/// # Errors
/// Returns an error if splitting fails or a share file cannot be written
pub fn split_to_files<R: RandomSource + ?Sized>(
    secret: &[u8],
    config: SplitConfig,
    dir: &Path,
    rng: &mut R,
) -> Result<Vec<PathBuf>> {
    let shares = sharing::split_with_config(secret, config, rng)
        .context("Failed to split secret")?;

    let mut paths = Vec::with_capacity(shares.len());
    for (idx, share) in shares.iter().enumerate() {
        let path = share_path(dir, idx + 1);
        fs::write(&path, share)
            .with_context(|| format!("Failed to write share file {}", path.display()))?;
        debug!("wrote share #{} ({} bytes)", idx + 1, share.len());
        paths.push(path);
    }

    info!(
        "split secret into {} shares with threshold {}",
        paths.len(),
        *config.threshold()
    );
    Ok(paths)
}

/// Read share files and combine them to reconstruct the secret
///
/// Paths are trimmed of surrounding whitespace before use.
///
/// # Errors
/// Returns an error if no paths are given, a file cannot be read, or the shares
/// do not form a valid share set
pub fn combine_files<P: AsRef<str>>(paths: &[P]) -> Result<Zeroizing<Vec<u8>>> {
    if paths.is_empty() {
        bail!("No share files provided");
    }

    let mut shares = Vec::with_capacity(paths.len());
    for (idx, path) in paths.iter().enumerate() {
        let path = path.as_ref().trim();
        let share = fs::read(path)
            .with_context(|| format!("Failed to read share #{} from {path}", idx + 1))?;
        shares.push(Zeroizing::new(share));
    }

    let views: Vec<&[u8]> = shares.iter().map(|share| share.as_slice()).collect();
    let secret = sharing::combine(&views).context("Failed to combine shares")?;
    info!("combined {} shares", shares.len());
    Ok(secret)
}
