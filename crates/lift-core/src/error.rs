//! Shared error type.
//!
//! Sub-crates define their own error enums for their own concerns and wrap
//! `LiftError` as one variant where registry lookups or tag parsing surface
//! through them.

use thiserror::Error;

use crate::ElevatorId;

/// Errors for concerns shared across `lift-*` crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("elevator {0} not found")]
    ElevatorNotFound(ElevatorId),

    #[error("unknown elevator kind: {0:?}")]
    UnknownKind(String),
}

/// Shorthand result type for `lift-core` operations.
pub type LiftResult<T> = Result<T, LiftError>;
