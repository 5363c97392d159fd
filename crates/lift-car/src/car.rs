//! The elevator car state machine.

use lift_core::{Direction, ElevatorId, ElevatorKind, Floor};

use crate::{AccessPolicy, CarError, CarResult, ElevatorStatus, FREIGHT_RESTRICTED_FLOOR};

/// A single elevator car.
///
/// One state machine serves both kinds: the [`ElevatorKind`] tag fixes what
/// `capacity` and `load` count (headcount vs. weight) and the
/// [`AccessPolicy`] fixes which floors are reachable.  All other behavior is
/// identical.
///
/// # Invariants
///
/// - `load <= capacity` at all times.
/// - `Floor::GROUND <= current_floor <= max_floor` at all times.
/// - `direction` reflects the last completed move: `None` until the car first
///   net-moves, then `Up`/`Down` per the last floor change.
///
/// Cars are built once (directly or via the factory in `lift-control`),
/// mutated only through [`move_to_floor`][Self::move_to_floor] /
/// [`add_load`][Self::add_load] / [`remove_load`][Self::remove_load], and
/// live as long as the registry that owns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorCar {
    id:            ElevatorId,
    kind:          ElevatorKind,
    capacity:      u32,
    max_floor:     Floor,
    access:        AccessPolicy,
    current_floor: Floor,
    direction:     Direction,
    moving:        bool,
    load:          u32,
}

impl ElevatorCar {
    /// Build a car with an explicit kind and access policy.
    ///
    /// New cars start at the ground floor, idle and empty.  Prefer the
    /// [`passenger`][Self::passenger] and [`freight`][Self::freight]
    /// constructors, which pick the conventional policy for each kind.
    pub fn new(
        id:        ElevatorId,
        kind:      ElevatorKind,
        capacity:  u32,
        max_floor: Floor,
        access:    AccessPolicy,
    ) -> CarResult<Self> {
        if capacity == 0 {
            return Err(CarError::InvalidCapacity);
        }
        if max_floor < Floor::GROUND {
            return Err(CarError::InvalidFloorCount);
        }
        Ok(Self {
            id,
            kind,
            capacity,
            max_floor,
            access,
            current_floor: Floor::GROUND,
            direction:     Direction::None,
            moving:        false,
            load:          0,
        })
    }

    /// A passenger car: capacity in headcount, no floor restrictions.
    pub fn passenger(id: ElevatorId, capacity: u32, max_floor: Floor) -> CarResult<Self> {
        Self::new(id, ElevatorKind::Passenger, capacity, max_floor, AccessPolicy::unrestricted())
    }

    /// A freight car: capacity in weight, barred from
    /// [`FREIGHT_RESTRICTED_FLOOR`].
    pub fn freight(id: ElevatorId, capacity: u32, max_floor: Floor) -> CarResult<Self> {
        Self::new(
            id,
            ElevatorKind::Freight,
            capacity,
            max_floor,
            AccessPolicy::restricting([FREIGHT_RESTRICTED_FLOOR]),
        )
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Move the car to `floor`.
    ///
    /// Rejects floors outside `1..=max_floor` and floors the car's
    /// [`AccessPolicy`] forbids; both leave the car untouched.  A move to the
    /// current floor succeeds and settles `direction` back to `None`.
    ///
    /// The transition is synchronous: `moving` is raised only for its
    /// duration, so callers always observe it lowered again.
    pub fn move_to_floor(&mut self, floor: Floor) -> CarResult<()> {
        if floor < Floor::GROUND || floor > self.max_floor {
            return Err(CarError::FloorOutOfRange { floor, max_floor: self.max_floor });
        }
        if !self.access.allows(floor) {
            return Err(CarError::RestrictedFloor { floor });
        }

        self.moving = true;
        self.direction = Direction::between(self.current_floor, floor);
        self.current_floor = floor;
        self.moving = false;
        Ok(())
    }

    /// Take `amount` of load (headcount or weight) on board.
    ///
    /// Fails with [`CarError::CapacityExceeded`] when the new load would pass
    /// `capacity`; arithmetic overflow counts as exceeded.
    pub fn add_load(&mut self, amount: u32) -> CarResult<()> {
        let new_load = self
            .load
            .checked_add(amount)
            .filter(|&l| l <= self.capacity)
            .ok_or(CarError::CapacityExceeded {
                load:     self.load,
                amount,
                capacity: self.capacity,
            })?;
        self.load = new_load;
        Ok(())
    }

    /// Let `amount` of load off.
    ///
    /// Fails with [`CarError::InsufficientLoad`] when `amount` exceeds the
    /// current load.
    pub fn remove_load(&mut self, amount: u32) -> CarResult<()> {
        if amount > self.load {
            return Err(CarError::InsufficientLoad { load: self.load, amount });
        }
        self.load -= amount;
        Ok(())
    }

    /// Snapshot the car's observable state.  No side effects.
    pub fn status(&self) -> ElevatorStatus {
        ElevatorStatus {
            current_floor: self.current_floor,
            direction:     self.direction,
            moving:        self.moving,
            load:          self.load,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> ElevatorKind {
        self.kind
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn max_floor(&self) -> Floor {
        self.max_floor
    }

    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    #[inline]
    pub fn load(&self) -> u32 {
        self.load
    }

    #[inline]
    pub fn access(&self) -> &AccessPolicy {
        &self.access
    }
}
