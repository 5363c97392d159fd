//! `lift-core` — foundational types for the `rust_lift` elevator-bank library.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                      |
//! |---------------|-----------------------------------------------|
//! | [`ids`]       | `ElevatorId`                                  |
//! | [`floor`]     | `Floor` — 1-based building floor              |
//! | [`direction`] | `Direction` enum                              |
//! | [`kind`]      | `ElevatorKind` enum + tag parsing             |
//! | [`error`]     | `LiftError`, `LiftResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod direction;
pub mod error;
pub mod floor;
pub mod ids;
pub mod kind;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use floor::Floor;
pub use ids::ElevatorId;
pub use kind::ElevatorKind;
