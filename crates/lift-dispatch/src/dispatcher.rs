//! Selection trait and default nearest-car implementation.
//!
//! # Pluggability
//!
//! The controller in `lift-control` calls selection via the [`Dispatch`]
//! trait, so applications can swap in custom strategies (zoned banks,
//! up-peak scheduling) without touching the core.  The default
//! [`NearestCarDispatcher`] is sufficient for a single bank.

use lift_car::ElevatorCar;

use crate::{policy, DispatchError, DispatchResult, FloorRequest};

// ── Dispatch trait ────────────────────────────────────────────────────────────

/// Pluggable car-selection strategy.
///
/// Implementations pick one car from the bank to answer `request`, or
/// explain why none can.  Selection must never mutate a car — the caller
/// performs the move/load operations on the winner afterwards.
pub trait Dispatch {
    /// Choose the car that answers `request`.
    ///
    /// `cars` is the bank in registry order; implementations that tie-break
    /// positionally must do so stably against that order.
    fn select<'a>(
        &self,
        request: FloorRequest,
        cars: &'a [ElevatorCar],
    ) -> DispatchResult<&'a ElevatorCar>;
}

// ── NearestCarDispatcher ──────────────────────────────────────────────────────

/// Picks the closest eligible car.
///
/// 1. Fails with [`DispatchError::NoElevatorsAvailable`] when the bank is
///    empty.
/// 2. Filters to cars the [`policy`] allows for this request.
/// 3. Fails with [`DispatchError::NoSuitableElevator`] when nothing survives.
/// 4. Ranks survivors by absolute floor distance to the pickup floor,
///    preferring an idle car over a moving one at equal distance.  Remaining
///    ties go to the car added to the registry first (`min_by_key` keeps the
///    first minimum, so selection is deterministic).
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestCarDispatcher;

impl Dispatch for NearestCarDispatcher {
    fn select<'a>(
        &self,
        request: FloorRequest,
        cars: &'a [ElevatorCar],
    ) -> DispatchResult<&'a ElevatorCar> {
        if cars.is_empty() {
            return Err(DispatchError::NoElevatorsAvailable);
        }

        cars.iter()
            .filter(|car| policy::is_eligible(car, request))
            .min_by_key(|car| (car.current_floor().distance(request.floor), car.is_moving()))
            .ok_or(DispatchError::NoSuitableElevator)
    }
}
