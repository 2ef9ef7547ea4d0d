//! `ShareCount` newtype for Shamir Secret Sharing

use crate::error::ParameterError;

/// Number of shares to create (2..=255)
///
/// Every share needs its own nonzero x-coordinate, and GF(2^8) has exactly
/// 255 nonzero elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u8);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u8 = 2;

    /// Maximum valid share count (255)
    pub const MAX: u8 = 255;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns an error if count is below 2 or above 255
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// let max_count = ShareCount::new(255).unwrap();
    /// assert_eq!(*max_count, ShareCount::MAX);
    ///
    /// assert!(ShareCount::new(1).is_err());
    /// assert!(ShareCount::new(256).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self, ParameterError> {
        if value < usize::from(Self::MIN) {
            return Err(ParameterError::TooFewParts(value));
        }
        let value = u8::try_from(value).map_err(|_| ParameterError::TooManyParts(value))?;
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
