//! The building registry.

use lift_car::ElevatorCar;
use lift_core::{ElevatorId, LiftError};

use crate::{ControlError, ControlResult};

/// A building: a floor count plus the elevator bank serving it.
///
/// The building exclusively owns its cars for the life of the process;
/// everything else borrows them through it.  Insertion order is significant:
/// it is the tie-break order the dispatcher falls back to.
#[derive(Debug, Clone)]
pub struct Building {
    floor_count: u16,
    cars:        Vec<ElevatorCar>,
}

impl Building {
    /// Create a building with `floor_count` floors and no cars yet.
    pub fn new(floor_count: u16) -> ControlResult<Self> {
        if floor_count == 0 {
            return Err(ControlError::NoFloors);
        }
        Ok(Self { floor_count, cars: Vec::new() })
    }

    /// Add a car to the bank.
    ///
    /// Ids are not checked for uniqueness; lookups resolve a duplicated id to
    /// the earliest-added car.
    pub fn add_car(&mut self, car: ElevatorCar) {
        self.cars.push(car);
    }

    /// Look up a car by id.
    pub fn car(&self, id: ElevatorId) -> ControlResult<&ElevatorCar> {
        self.cars
            .iter()
            .find(|car| car.id() == id)
            .ok_or_else(|| LiftError::ElevatorNotFound(id).into())
    }

    /// Look up a car by id for mutation.
    pub fn car_mut(&mut self, id: ElevatorId) -> ControlResult<&mut ElevatorCar> {
        self.cars
            .iter_mut()
            .find(|car| car.id() == id)
            .ok_or_else(|| LiftError::ElevatorNotFound(id).into())
    }

    /// The bank in insertion order.
    pub fn cars(&self) -> &[ElevatorCar] {
        &self.cars
    }

    #[inline]
    pub fn floor_count(&self) -> u16 {
        self.floor_count
    }

    #[inline]
    pub fn car_count(&self) -> usize {
        self.cars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}
