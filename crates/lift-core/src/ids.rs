//! Strongly typed identifier for elevator cars.
//!
//! The inner integer is `pub` so registries can mint sequential ids without
//! ceremony.  Using an unsigned inner type makes "id must be non-negative"
//! structural rather than a runtime check.

use std::fmt;

/// Unique identifier of an elevator car within a building.
///
/// `Copy + Ord + Hash` so it can be used as a map key and sorted collection
/// element without ceremony.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorId(pub u32);

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElevatorId({})", self.0)
    }
}
