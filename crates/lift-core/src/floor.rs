//! 1-based building floor.

use std::fmt;

/// A building floor.
///
/// Floors are 1-based: the ground floor is [`Floor::GROUND`] and a building
/// with `max_floor = Floor(10)` spans `1..=10`.  `Floor(0)` is representable
/// but outside every valid range, so out-of-range checks stay uniform at both
/// ends.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u16);

impl Floor {
    /// The lowest valid floor.
    pub const GROUND: Floor = Floor(1);

    /// Number of floors between `self` and `other`, ignoring direction.
    #[inline]
    pub fn distance(self, other: Floor) -> u16 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
