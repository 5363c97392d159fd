//! Floor-access policy.

use lift_core::Floor;

/// The floor freight cars are barred from.
pub const FREIGHT_RESTRICTED_FLOOR: Floor = Floor(5);

/// The set of floors a car may never visit.
///
/// Carried per-car so restrictions are data, not a subtype: a passenger car
/// holds an empty set, a freight car holds [`FREIGHT_RESTRICTED_FLOOR`].
/// The set is fixed at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessPolicy {
    restricted: Vec<Floor>,
}

impl AccessPolicy {
    /// A policy that allows every floor.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// A policy that forbids the given floors.
    pub fn restricting(floors: impl IntoIterator<Item = Floor>) -> Self {
        Self {
            restricted: floors.into_iter().collect(),
        }
    }

    /// `true` if a car under this policy may visit `floor`.
    #[inline]
    pub fn allows(&self, floor: Floor) -> bool {
        !self.restricted.contains(&floor)
    }

    /// The forbidden floors, in construction order.
    pub fn restricted_floors(&self) -> &[Floor] {
        &self.restricted
    }
}
