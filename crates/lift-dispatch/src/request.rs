//! Pickup-call parameter object.

use lift_core::{Direction, Floor};

/// An incoming call for an elevator at a floor.
///
/// Carries no identity and is never mutated; the controller builds one per
/// validated request and hands it to the dispatcher by value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorRequest {
    /// The pickup floor.
    pub floor: Floor,
    /// Headcount or weight waiting to board, per the answering car's kind.
    pub load_amount: u32,
    /// Desired direction of travel.
    pub direction: Direction,
}

impl FloorRequest {
    pub fn new(floor: Floor, load_amount: u32, direction: Direction) -> Self {
        Self { floor, load_amount, direction }
    }
}
