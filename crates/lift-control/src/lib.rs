//! `lift-control` — the application-facing layer of the `rust_lift` library.
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`building`]   | `Building` — registry owning the elevator bank         |
//! | [`factory`]    | `create_elevator` — tag-keyed car construction         |
//! | [`controller`] | `ElevatorController<D>` — validated request entry points |
//! | [`error`]      | `ControlError`, `ControlResult<T>`                     |
//!
//! # Request flow
//!
//! caller → [`ElevatorController`] (validates bounds and direction) →
//! [`Dispatch`][lift_dispatch::Dispatch] (selects a car from the
//! [`Building`]) → [`ElevatorCar`][lift_car::ElevatorCar] (moves and loads)
//! → status read back.  Every step is synchronous; failures propagate to the
//! caller with their originating kind intact.

pub mod building;
pub mod controller;
pub mod error;
pub mod factory;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use building::Building;
pub use controller::ElevatorController;
pub use error::{ControlError, ControlResult};
pub use factory::create_elevator;
