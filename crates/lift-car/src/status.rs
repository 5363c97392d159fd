//! Read-only car snapshot.

use lift_core::{Direction, Floor};

/// A point-in-time view of one car, recomputed on every
/// [`status()`][crate::ElevatorCar::status] call and never cached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorStatus {
    /// The floor the car is currently on.
    pub current_floor: Floor,
    /// Direction of the last completed move; `None` until the car first
    /// net-moves.
    pub direction: Direction,
    /// Whether the car is mid-transition.  Moves are synchronous, so this is
    /// always `false` by the time a caller can observe it.
    pub moving: bool,
    /// Current occupants (headcount) or cargo (weight), per the car's kind.
    pub load: u32,
}
