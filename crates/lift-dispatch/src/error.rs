use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no elevators available")]
    NoElevatorsAvailable,

    #[error("no suitable elevator found")]
    NoSuitableElevator,
}

pub type DispatchResult<T> = Result<T, DispatchError>;
