use lift_car::CarError;
use lift_core::{Floor, LiftError};
use lift_dispatch::DispatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("a building must have at least one floor")]
    NoFloors,

    #[error("pickup floor {floor} is invalid for a {floor_count}-floor building")]
    PickupFloorOutOfRange { floor: Floor, floor_count: u16 },

    #[error("a pickup request must travel up or down")]
    DirectionRequired,

    #[error("lookup failed: {0}")]
    Lift(#[from] LiftError),

    #[error("car rejected the operation: {0}")]
    Car(#[from] CarError),

    #[error("dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),
}

pub type ControlResult<T> = Result<T, ControlError>;
