//! `lift-car` — the elevator car state machine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`access`] | `AccessPolicy` — floors a car may never visit               |
//! | [`car`]    | `ElevatorCar` — position, direction, and load state machine |
//! | [`status`] | `ElevatorStatus` — read-only snapshot                       |
//! | [`error`]  | `CarError`, `CarResult<T>`                                  |
//!
//! # State-machine model
//!
//! Passenger and freight cars share one state machine.  The variants differ
//! only in the unit their capacity counts (headcount vs. weight) and in which
//! floors they may visit, so [`ElevatorCar`] is parameterized by an
//! [`AccessPolicy`] value instead of being split into two types.  The
//! [`ElevatorKind`][lift_core::ElevatorKind] tag survives on the car because
//! dispatch eligibility keys on it.
//!
//! Every operation is a single synchronous transition: it either fully
//! applies its effect or returns an error leaving the car untouched.

pub mod access;
pub mod car;
pub mod error;
pub mod status;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use access::{AccessPolicy, FREIGHT_RESTRICTED_FLOOR};
pub use car::ElevatorCar;
pub use error::{CarError, CarResult};
pub use status::ElevatorStatus;
