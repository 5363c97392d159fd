//! Travel direction shared by cars and pickup requests.

use std::cmp::Ordering;

use crate::Floor;

/// The direction a car last travelled, or a request wants to travel.
///
/// For a car this is derived, never set directly: it reflects the last
/// completed move and stays [`Direction::None`] until the car first
/// net-moves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Not moving in either direction (default state).
    #[default]
    None,
    /// Towards higher floors.
    Up,
    /// Towards lower floors.
    Down,
}

impl Direction {
    /// The direction of travel from `from` to `to`.
    ///
    /// `None` when the floors are equal.
    #[inline]
    pub fn between(from: Floor, to: Floor) -> Direction {
        match to.cmp(&from) {
            Ordering::Greater => Direction::Up,
            Ordering::Less    => Direction::Down,
            Ordering::Equal   => Direction::None,
        }
    }

    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::None => "none",
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
