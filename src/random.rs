//! Randomness source for coefficients and share coordinates
//!
//! Callers pass the source explicitly. Any `rand` generator that is both
//! [`RngCore`] and [`CryptoRng`] qualifies, so production code hands in
//! [`rand::rngs::OsRng`] and tests can hand in a seeded `StdRng`.

use log::trace;
use rand::{CryptoRng, RngCore};

use crate::error::{Result, ShamirError};

/// Draw cap for a single nonzero element
pub const MAX_NONZERO_DRAWS: usize = 1024;

/// Draw cap for a full set of distinct coordinates
///
/// Collecting all 255 nonzero elements takes about 1600 draws on average.
pub const MAX_COORDINATE_DRAWS: usize = 1 << 16;

/// Supplier of uniformly random field elements
pub trait RandomSource {
    /// A uniformly random element, zero included
    ///
    /// # Errors
    /// Returns [`ShamirError::Randomness`] if the underlying entropy source fails
    fn random_element(&mut self) -> Result<u8>;

    /// A uniformly random element from 1..=255
    ///
    /// # Errors
    /// Fails if the source fails, or if it keeps producing zero
    fn random_nonzero_element(&mut self) -> Result<u8> {
        for _ in 0..MAX_NONZERO_DRAWS {
            let value = self.random_element()?;
            if value != 0 {
                return Ok(value);
            }
        }
        Err(ShamirError::RandomnessExhausted {
            draws: MAX_NONZERO_DRAWS,
        })
    }

    /// Fills `out` with independent random elements
    ///
    /// # Errors
    /// Returns [`ShamirError::Randomness`] if the underlying entropy source fails
    fn fill_elements(&mut self, out: &mut [u8]) -> Result<()> {
        for slot in out.iter_mut() {
            *slot = self.random_element()?;
        }
        Ok(())
    }
}

impl<R: RngCore + CryptoRng> RandomSource for R {
    fn random_element(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.fill_elements(&mut byte)?;
        Ok(byte[0])
    }

    fn fill_elements(&mut self, out: &mut [u8]) -> Result<()> {
        self.try_fill_bytes(out)
            .map_err(|e| ShamirError::Randomness(e.to_string()))
    }
}

/// Samples `count` pairwise distinct nonzero elements by rejection
///
/// # Errors
/// Fails if the source fails or the draw cap is reached before `count`
/// distinct values were seen.
pub fn distinct_nonzero_elements<R: RandomSource + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<u8>> {
    let mut seen = [false; 256];
    let mut chosen = Vec::with_capacity(count);
    let mut draws = 0;

    while chosen.len() < count {
        if draws >= MAX_COORDINATE_DRAWS {
            return Err(ShamirError::RandomnessExhausted { draws });
        }
        draws += 1;

        let candidate = rng.random_nonzero_element()?;
        if seen[candidate as usize] {
            trace!("rejected coordinate candidate after {draws} draws");
            continue;
        }
        seen[candidate as usize] = true;
        chosen.push(candidate);
    }

    Ok(chosen)
}
