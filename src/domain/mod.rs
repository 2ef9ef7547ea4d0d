//! Domain types for Shamir Secret Sharing
//!
//! This module contains validated newtypes and configuration for secure secret sharing:
//! - [`Threshold`] - Minimum shares required for reconstruction (2..=255)
//! - [`ShareCount`] - Total number of shares to create (2..=255)
//! - [`ShareCoordinate`] - Nonzero x-coordinate carried by each share (1..=255)
//! - [`SplitConfig`] - Validated threshold and share count pair

mod config;
mod share_coordinate;
mod share_count;
mod threshold;

pub use config::SplitConfig;
pub use share_coordinate::ShareCoordinate;
pub use share_count::ShareCount;
pub use threshold::Threshold;
