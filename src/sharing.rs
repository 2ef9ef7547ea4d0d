//! Splitting secrets into shares and combining them back
//!
//! A share is the secret's length plus one byte: byte `i` is the evaluation of
//! the polynomial for secret byte `i`, and the final byte is the share's
//! x-coordinate. There is no header, so a share reveals nothing beyond the
//! secret's length.
//!
//! # Examples
//!
//! ```rust
//! use shamir::sharing::{combine, split};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let shares = split(b"ab", 3, 2)?;
//! assert_eq!(shares.len(), 3);
//! assert!(shares.iter().all(|share| share.len() == 3));
//!
//! let recovered = combine(&[&shares[0], &shares[2]])?;
//! assert_eq!(recovered.as_slice(), b"ab");
//! # Ok(())
//! # }
//! ```
//!
//! Combining fewer shares than the threshold, or shares from different
//! splits, still yields bytes; they just aren't the secret. Callers who need
//! to detect that must put a checksum or MAC inside the secret.

use log::debug;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::domain::{ShareCoordinate, SplitConfig};
use crate::error::{MalformedReason, Result, ShamirError};
use crate::polynomial::{self, Polynomial};
use crate::random::{self, RandomSource};

/// Splits `secret` into `parts` shares, any `threshold` of which recover it
///
/// Randomness comes from the operating system's CSPRNG.
///
/// # Errors
/// Returns [`ShamirError::InvalidParameters`] unless `2 <= threshold <= parts <= 255`,
/// and [`ShamirError::EmptySecret`] for an empty secret.
pub fn split(secret: &[u8], parts: usize, threshold: usize) -> Result<Vec<Vec<u8>>> {
    split_with(secret, parts, threshold, &mut OsRng)
}

/// Like [`split`], drawing coefficients and coordinates from `rng`
///
/// # Errors
/// See [`split`]; also fails if `rng` fails.
pub fn split_with<R: RandomSource + ?Sized>(
    secret: &[u8],
    parts: usize,
    threshold: usize,
    rng: &mut R,
) -> Result<Vec<Vec<u8>>> {
    let config = SplitConfig::from_raw(parts, threshold)?;
    split_with_config(secret, config, rng)
}

/// Splits `secret` according to an already validated configuration
///
/// # Errors
/// Returns [`ShamirError::EmptySecret`] for an empty secret, or a randomness
/// error if `rng` fails.
pub fn split_with_config<R: RandomSource + ?Sized>(
    secret: &[u8],
    config: SplitConfig,
    rng: &mut R,
) -> Result<Vec<Vec<u8>>> {
    if secret.is_empty() {
        return Err(ShamirError::EmptySecret);
    }

    let parts = usize::from(*config.share_count());
    let degree = config.threshold().degree();
    debug!(
        "splitting {} byte secret into {parts} shares, threshold {}",
        secret.len(),
        *config.threshold()
    );

    let coordinates = random::distinct_nonzero_elements(rng, parts)?;
    let mut shares: Vec<Vec<u8>> = (0..parts)
        .map(|_| Vec::with_capacity(secret.len() + 1))
        .collect();

    // A fresh polynomial per byte; reusing coefficients across bytes leaks the secret
    for &byte in secret {
        let polynomial = Polynomial::random(byte, degree, rng)?;
        for (share, &x) in shares.iter_mut().zip(&coordinates) {
            share.push(polynomial.evaluate(x));
        }
    }

    for (share, &x) in shares.iter_mut().zip(&coordinates) {
        share.push(x);
    }

    Ok(shares)
}

/// Recovers a secret from shares produced by [`split`]
///
/// Shares may be given in any order, and more than the threshold may be
/// supplied.
///
/// # Errors
/// - [`ShamirError::InsufficientShares`] for fewer than two shares
/// - [`ShamirError::MismatchedShareLength`] if lengths differ
/// - [`ShamirError::MalformedShare`] for shares under two bytes or with coordinate 0
/// - [`ShamirError::DuplicateShare`] if two shares carry the same coordinate
pub fn combine<S: AsRef<[u8]>>(shares: &[S]) -> Result<Zeroizing<Vec<u8>>> {
    let coordinates = validate_shares(shares)?;
    let payload_len = shares[0].as_ref().len() - 1;
    debug!(
        "combining {} shares into {payload_len} byte secret",
        shares.len()
    );

    let weights = polynomial::lagrange_basis(&coordinates, 0)?;
    let mut secret = Zeroizing::new(Vec::with_capacity(payload_len));
    for i in 0..payload_len {
        let ys = shares.iter().map(|share| share.as_ref()[i]);
        secret.push(polynomial::weighted_sum(&weights, ys));
    }

    Ok(secret)
}

/// Checks share-set structure and returns the coordinates in input order
fn validate_shares<S: AsRef<[u8]>>(shares: &[S]) -> Result<Vec<u8>> {
    if shares.len() < 2 {
        return Err(ShamirError::InsufficientShares(shares.len()));
    }

    let expected = shares[0].as_ref().len();
    for (idx, share) in shares.iter().enumerate().skip(1) {
        let actual = share.as_ref().len();
        if actual != expected {
            return Err(ShamirError::MismatchedShareLength {
                index: idx + 1,
                expected,
                actual,
            });
        }
    }

    if expected < 2 {
        return Err(ShamirError::MalformedShare {
            index: 1,
            reason: MalformedReason::TooShort(expected),
        });
    }

    let mut seen = [false; 256];
    let mut coordinates = Vec::with_capacity(shares.len());
    for (idx, share) in shares.iter().enumerate() {
        let coordinate = ShareCoordinate::of_share(share.as_ref()).map_err(|reason| {
            ShamirError::MalformedShare {
                index: idx + 1,
                reason,
            }
        })?;
        if seen[usize::from(*coordinate)] {
            return Err(ShamirError::DuplicateShare {
                index: idx + 1,
                coordinate: *coordinate,
            });
        }
        seen[usize::from(*coordinate)] = true;
        coordinates.push(*coordinate);
    }

    Ok(coordinates)
}
