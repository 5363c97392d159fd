use lift_core::Floor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarError {
    #[error("capacity must be positive")]
    InvalidCapacity,

    #[error("a car must serve at least one floor")]
    InvalidFloorCount,

    #[error("floor {floor} is out of range (valid floors are 1..={max_floor})")]
    FloorOutOfRange { floor: Floor, max_floor: Floor },

    #[error("car may not access floor {floor}")]
    RestrictedFloor { floor: Floor },

    #[error("adding {amount} to load {load} exceeds capacity {capacity}")]
    CapacityExceeded { load: u32, amount: u32, capacity: u32 },

    #[error("cannot remove {amount} from load {load}")]
    InsufficientLoad { load: u32, amount: u32 },
}

pub type CarResult<T> = Result<T, CarError>;
