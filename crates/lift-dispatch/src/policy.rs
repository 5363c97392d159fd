//! Kind-and-load eligibility rules.
//!
//! The load bands are disjoint: passenger cars take small parties, freight
//! cars take heavy cargo.  A request in the 11..=100 band matches neither
//! rule and no car is ever eligible for it; the gap is part of the policy
//! as operated.

use lift_car::ElevatorCar;
use lift_core::ElevatorKind;

use crate::FloorRequest;

/// Largest party a passenger car may answer.
pub const PASSENGER_LOAD_LIMIT: u32 = 10;

/// Smallest load a freight car may answer; lighter requests are passenger
/// territory.
pub const FREIGHT_LOAD_THRESHOLD: u32 = 100;

/// `true` if `car` is allowed to answer `request`.
///
/// Exhaustive over [`ElevatorKind`] so a new kind cannot ship without an
/// eligibility rule.  For freight cars the exclusion-floor check runs before
/// the load band: a restricted pickup floor disqualifies the car no matter
/// how heavy the request.
pub fn is_eligible(car: &ElevatorCar, request: FloorRequest) -> bool {
    match car.kind() {
        ElevatorKind::Passenger => request.load_amount <= PASSENGER_LOAD_LIMIT,
        ElevatorKind::Freight => {
            car.access().allows(request.floor) && request.load_amount > FREIGHT_LOAD_THRESHOLD
        }
    }
}
