//! Shamir's Secret Sharing over GF(2^8)
//!
//! [`sharing::split`] turns a secret into shares, any `threshold` of which
//! [`sharing::combine`] turns back into the secret. The share layout is the
//! secret-length payload followed by a one-byte x-coordinate.

#[cfg(feature = "cli")]
pub mod cli;
pub mod commands;
pub mod domain;
pub mod error;
pub mod gf256;
pub mod polynomial;
pub mod random;
pub mod sharing;

pub use error::{MalformedReason, ParameterError, ShamirError};
pub use random::RandomSource;
pub use sharing::{combine, split, split_with};
