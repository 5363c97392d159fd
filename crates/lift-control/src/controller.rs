//! Request validation and orchestration.

use lift_car::ElevatorStatus;
use lift_core::{Direction, ElevatorId, Floor};
use lift_dispatch::{Dispatch, FloorRequest};

use crate::{Building, ControlError, ControlResult};

/// The entry point callers talk to.
///
/// Validates externally supplied input, asks the dispatcher for a car, and
/// drives that car's move/load operations.  The dispatch strategy is a
/// compile-time parameter, so swapping policies carries no runtime cost.
///
/// Everything downstream of validation trusts the invariants established
/// here; the core types only re-check their own operation contracts.
pub struct ElevatorController<D: Dispatch> {
    building:   Building,
    dispatcher: D,
}

impl<D: Dispatch> ElevatorController<D> {
    /// Create a controller over `building` using `dispatcher` for selection.
    pub fn new(building: Building, dispatcher: D) -> Self {
        Self { building, dispatcher }
    }

    /// Request a pickup at `from_floor` for `load_amount` travelling
    /// `direction`.
    ///
    /// Validates that `from_floor` is a floor callers may summon from
    /// (`1..floor_count`) and that a travel direction was given, then selects
    /// a car, moves it to the pickup floor, and boards the load.  Returns the
    /// serving car's id so callers can query its status later.
    ///
    /// # Errors
    ///
    /// Validation failures, dispatch failures, and car rejections all
    /// propagate with their originating kind preserved for diagnostics.
    #[tracing::instrument(skip(self))]
    pub fn request_elevator(
        &mut self,
        from_floor:  Floor,
        load_amount: u32,
        direction:   Direction,
    ) -> ControlResult<ElevatorId> {
        let floor_count = self.building.floor_count();
        if from_floor < Floor::GROUND || from_floor.0 >= floor_count {
            return Err(ControlError::PickupFloorOutOfRange { floor: from_floor, floor_count });
        }
        if direction == Direction::None {
            return Err(ControlError::DirectionRequired);
        }

        let request = FloorRequest::new(from_floor, load_amount, direction);
        let id = self.dispatcher.select(request, self.building.cars())?.id();
        tracing::debug!(car = %id, floor = %from_floor, load = load_amount, "car selected");

        let car = self.building.car_mut(id)?;
        car.move_to_floor(from_floor)?;
        car.add_load(load_amount)?;
        Ok(id)
    }

    /// Snapshot the status of the car with the given id.
    #[tracing::instrument(skip(self))]
    pub fn elevator_status(&self, id: ElevatorId) -> ControlResult<ElevatorStatus> {
        Ok(self.building.car(id)?.status())
    }

    /// The building this controller manages.
    pub fn building(&self) -> &Building {
        &self.building
    }

    /// Mutable access to the building, e.g. to add cars after construction.
    pub fn building_mut(&mut self) -> &mut Building {
        &mut self.building
    }
}
