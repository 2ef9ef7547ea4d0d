//! Threshold newtype for Shamir Secret Sharing

use crate::error::ParameterError;

/// Threshold for Shamir Secret Sharing (2..=255)
///
/// Invariant: 2 <= threshold <= 255 (enforced at construction)
/// A threshold of 1 provides no security benefit since any single share can recover the entire secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Smallest useful threshold
    pub const MIN: u8 = 2;

    /// Creates a new threshold
    ///
    /// # Errors
    /// Returns an error if the threshold is less than 2 or greater than 255
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(1).is_err());
    /// assert!(Threshold::new(256).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self, ParameterError> {
        if value < usize::from(Self::MIN) {
            return Err(ParameterError::ThresholdTooSmall(value));
        }
        let value = u8::try_from(value).map_err(|_| ParameterError::ThresholdTooLarge(value))?;
        Ok(Self(value))
    }

    /// Number of random coefficients each byte polynomial needs
    #[must_use]
    pub fn degree(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl std::ops::Deref for Threshold {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
