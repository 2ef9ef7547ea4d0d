//! `ShareCoordinate` newtype for Shamir Secret Sharing

use crate::error::MalformedReason;

/// The x-coordinate a share was evaluated at (1..=255)
///
/// Zero is where the secret lives, so it is never handed out as a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareCoordinate(u8);

impl ShareCoordinate {
    /// Creates a new share coordinate
    ///
    /// # Errors
    /// Returns an error if the coordinate is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir::domain::ShareCoordinate;
    ///
    /// let coordinate = ShareCoordinate::new(17).unwrap();
    /// assert_eq!(*coordinate, 17);
    ///
    /// assert!(ShareCoordinate::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, MalformedReason> {
        if value == 0 {
            return Err(MalformedReason::ZeroCoordinate);
        }
        Ok(Self(value))
    }

    /// Reads the coordinate stored in the last byte of a share
    ///
    /// # Errors
    /// Returns an error if the share is too short to carry both a payload and
    /// a coordinate, or if the coordinate is 0
    pub fn of_share(share: &[u8]) -> Result<Self, MalformedReason> {
        match share {
            [_, .., last] => Self::new(*last),
            _ => Err(MalformedReason::TooShort(share.len())),
        }
    }
}

impl std::ops::Deref for ShareCoordinate {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_share_reads_last_byte() {
        let coordinate = ShareCoordinate::of_share(&[0x10, 0x20, 0x05]).unwrap();
        assert_eq!(*coordinate, 5);
    }

    #[test]
    fn test_of_share_rejects_short_share() {
        assert_eq!(
            ShareCoordinate::of_share(&[0x05]),
            Err(MalformedReason::TooShort(1))
        );
        assert_eq!(
            ShareCoordinate::of_share(&[]),
            Err(MalformedReason::TooShort(0))
        );
    }

    #[test]
    fn test_of_share_rejects_zero() {
        assert_eq!(
            ShareCoordinate::of_share(&[0x10, 0x00]),
            Err(MalformedReason::ZeroCoordinate)
        );
    }
}
