//! Elevator kind tag.
//!
//! The set of kinds is closed on purpose (no `#[non_exhaustive]`): dispatch
//! eligibility is an exhaustive `match` on this enum, so adding a kind forces
//! every policy site to state what the new kind does.

use std::str::FromStr;

use crate::LiftError;

/// Which variant of car an elevator is.
///
/// The kind fixes the unit of load: headcount for `Passenger`, weight for
/// `Freight`.  Access restrictions are carried per-car, not per-kind.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElevatorKind {
    /// Carries people; capacity and load are headcounts.
    Passenger,
    /// Carries goods; capacity and load are weights.
    Freight,
}

impl ElevatorKind {
    /// Human-readable label, also the accepted factory tag.
    pub fn as_str(self) -> &'static str {
        match self {
            ElevatorKind::Passenger => "passenger",
            ElevatorKind::Freight   => "freight",
        }
    }
}

impl FromStr for ElevatorKind {
    type Err = LiftError;

    /// Parse a kind tag, case-insensitively.
    fn from_str(s: &str) -> Result<Self, LiftError> {
        if s.eq_ignore_ascii_case("passenger") {
            Ok(ElevatorKind::Passenger)
        } else if s.eq_ignore_ascii_case("freight") {
            Ok(ElevatorKind::Freight)
        } else {
            Err(LiftError::UnknownKind(s.to_owned()))
        }
    }
}

impl std::fmt::Display for ElevatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
