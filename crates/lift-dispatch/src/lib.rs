//! `lift-dispatch` — choosing which car answers a pickup call.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`request`]    | `FloorRequest` — immutable pickup-call parameter object |
//! | [`policy`]     | Kind-and-load eligibility rules                         |
//! | [`dispatcher`] | `Dispatch` trait + `NearestCarDispatcher`               |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`                    |
//!
//! # Filter before rank
//!
//! Selection runs in two stages: the [`policy`] filter first reduces the
//! bank to cars allowed to answer the request at all, then the ranking picks
//! the nearest of those.  Eligibility encodes business policy (freight
//! capacity bands and exclusion floors) and must never be overridden by
//! proximity, so ranking only ever breaks ties within the compliant set.

pub mod dispatcher;
pub mod error;
pub mod policy;
pub mod request;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dispatcher::{Dispatch, NearestCarDispatcher};
pub use error::{DispatchError, DispatchResult};
pub use policy::{FREIGHT_LOAD_THRESHOLD, PASSENGER_LOAD_LIMIT};
pub use request::FloorRequest;
