//! Tag-keyed car construction.

use lift_car::ElevatorCar;
use lift_core::{ElevatorId, ElevatorKind, Floor};

use crate::ControlResult;

/// Build a car from a textual kind tag.
///
/// The tag is matched case-insensitively against the
/// [`ElevatorKind`] labels; unrecognized tags fail with
/// [`LiftError::UnknownKind`][lift_core::LiftError::UnknownKind].  Capacity
/// and floor-count validation is the constructor's, so a zero `capacity` or
/// `max_floor` surfaces as the corresponding
/// [`CarError`][lift_car::CarError].
pub fn create_elevator(
    kind_tag:  &str,
    id:        ElevatorId,
    capacity:  u32,
    max_floor: Floor,
) -> ControlResult<ElevatorCar> {
    let kind: ElevatorKind = kind_tag.parse()?;
    let car = match kind {
        ElevatorKind::Passenger => ElevatorCar::passenger(id, capacity, max_floor)?,
        ElevatorKind::Freight   => ElevatorCar::freight(id, capacity, max_floor)?,
    };
    Ok(car)
}
