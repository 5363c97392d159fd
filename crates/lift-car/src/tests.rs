//! Unit tests for lift-car.

use lift_core::{Direction, ElevatorId, Floor};

use crate::{AccessPolicy, CarError, ElevatorCar, FREIGHT_RESTRICTED_FLOOR};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Passenger car: 10 heads, 10 floors.
fn passenger() -> ElevatorCar {
    ElevatorCar::passenger(ElevatorId(0), 10, Floor(10)).unwrap()
}

/// Freight car: 500 kg, 10 floors, floor 5 barred.
fn freight() -> ElevatorCar {
    ElevatorCar::freight(ElevatorId(1), 500, Floor(10)).unwrap()
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn fresh_car_is_grounded_idle_and_empty() {
        let car = passenger();
        assert_eq!(car.current_floor(), Floor::GROUND);
        assert_eq!(car.direction(), Direction::None);
        assert!(!car.is_moving());
        assert_eq!(car.load(), 0);
    }

    #[test]
    fn zero_capacity_rejected() {
        let err = ElevatorCar::passenger(ElevatorId(0), 0, Floor(10)).unwrap_err();
        assert!(matches!(err, CarError::InvalidCapacity));
    }

    #[test]
    fn zero_floors_rejected() {
        let err = ElevatorCar::freight(ElevatorId(0), 500, Floor(0)).unwrap_err();
        assert!(matches!(err, CarError::InvalidFloorCount));
    }

    #[test]
    fn single_floor_building_allowed() {
        let car = ElevatorCar::passenger(ElevatorId(0), 4, Floor(1)).unwrap();
        assert_eq!(car.max_floor(), Floor::GROUND);
    }

    #[test]
    fn passenger_policy_is_unrestricted() {
        assert!(passenger().access().restricted_floors().is_empty());
    }

    #[test]
    fn freight_policy_bars_floor_five() {
        let car = freight();
        assert!(!car.access().allows(FREIGHT_RESTRICTED_FLOOR));
        assert!(car.access().allows(Floor(4)));
    }
}

// ── Moves ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod moves {
    use super::*;

    #[test]
    fn move_up_sets_floor_and_direction() {
        let mut car = passenger();
        car.move_to_floor(Floor(7)).unwrap();
        assert_eq!(car.current_floor(), Floor(7));
        assert_eq!(car.direction(), Direction::Up);
        assert!(!car.is_moving());
    }

    #[test]
    fn move_down_sets_direction() {
        let mut car = passenger();
        car.move_to_floor(Floor(7)).unwrap();
        car.move_to_floor(Floor(2)).unwrap();
        assert_eq!(car.current_floor(), Floor(2));
        assert_eq!(car.direction(), Direction::Down);
    }

    #[test]
    fn move_to_current_floor_settles_direction() {
        let mut car = passenger();
        car.move_to_floor(Floor(4)).unwrap();
        car.move_to_floor(Floor(4)).unwrap();
        assert_eq!(car.current_floor(), Floor(4));
        assert_eq!(car.direction(), Direction::None);
    }

    #[test]
    fn floor_zero_rejected() {
        let mut car = passenger();
        let err = car.move_to_floor(Floor(0)).unwrap_err();
        assert!(matches!(err, CarError::FloorOutOfRange { .. }));
    }

    #[test]
    fn floor_above_max_rejected() {
        let mut car = passenger();
        let err = car.move_to_floor(Floor(11)).unwrap_err();
        assert!(matches!(err, CarError::FloorOutOfRange { .. }));
    }

    #[test]
    fn failed_move_leaves_state_untouched() {
        let mut car = passenger();
        car.move_to_floor(Floor(3)).unwrap();
        let before = car.status();
        car.move_to_floor(Floor(99)).unwrap_err();
        assert_eq!(car.status(), before);
    }

    #[test]
    fn freight_rejects_restricted_floor() {
        let mut car = freight();
        let err = car.move_to_floor(FREIGHT_RESTRICTED_FLOOR).unwrap_err();
        assert!(matches!(err, CarError::RestrictedFloor { floor } if floor == Floor(5)));
    }

    #[test]
    fn freight_rejects_restricted_floor_even_when_loaded() {
        let mut car = freight();
        car.add_load(200).unwrap();
        assert!(matches!(
            car.move_to_floor(Floor(5)),
            Err(CarError::RestrictedFloor { .. })
        ));
        assert_eq!(car.current_floor(), Floor::GROUND);
        assert_eq!(car.direction(), Direction::None);
    }

    #[test]
    fn freight_moves_to_unrestricted_floors() {
        let mut car = freight();
        car.move_to_floor(Floor(6)).unwrap();
        assert_eq!(car.current_floor(), Floor(6));
        assert_eq!(car.direction(), Direction::Up);
    }

    #[test]
    fn range_check_runs_before_restriction() {
        // A floor that is both restricted and too high reports out-of-range.
        let mut car = ElevatorCar::new(
            ElevatorId(2),
            lift_core::ElevatorKind::Freight,
            500,
            Floor(3),
            AccessPolicy::restricting([Floor(5)]),
        )
        .unwrap();
        assert!(matches!(
            car.move_to_floor(Floor(5)),
            Err(CarError::FloorOutOfRange { .. })
        ));
    }
}

// ── Load accounting ───────────────────────────────────────────────────────────

#[cfg(test)]
mod load {
    use super::*;

    #[test]
    fn add_then_remove_roundtrips() {
        let mut car = passenger();
        car.add_load(4).unwrap();
        let before = car.load();
        car.add_load(3).unwrap();
        car.remove_load(3).unwrap();
        assert_eq!(car.load(), before);
    }

    #[test]
    fn add_to_exact_capacity_allowed() {
        let mut car = passenger();
        car.add_load(10).unwrap();
        assert_eq!(car.load(), 10);
    }

    #[test]
    fn add_beyond_capacity_rejected() {
        let mut car = passenger();
        car.add_load(10).unwrap();
        let err = car.add_load(1).unwrap_err();
        assert!(matches!(err, CarError::CapacityExceeded { load: 10, amount: 1, capacity: 10 }));
        assert_eq!(car.load(), 10);
    }

    #[test]
    fn add_overflowing_u32_counts_as_exceeded() {
        let mut car = freight();
        car.add_load(500).unwrap();
        assert!(matches!(
            car.add_load(u32::MAX),
            Err(CarError::CapacityExceeded { .. })
        ));
        assert_eq!(car.load(), 500);
    }

    #[test]
    fn remove_more_than_load_rejected() {
        let mut car = passenger();
        car.add_load(2).unwrap();
        let err = car.remove_load(3).unwrap_err();
        assert!(matches!(err, CarError::InsufficientLoad { load: 2, amount: 3 }));
        assert_eq!(car.load(), 2);
    }

    #[test]
    fn remove_entire_load_empties_car() {
        let mut car = freight();
        car.add_load(350).unwrap();
        car.remove_load(350).unwrap();
        assert_eq!(car.load(), 0);
    }

    #[test]
    fn add_zero_is_a_noop() {
        let mut car = passenger();
        car.add_load(0).unwrap();
        car.remove_load(0).unwrap();
        assert_eq!(car.load(), 0);
    }
}

// ── Status ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod status {
    use super::*;

    #[test]
    fn snapshot_mirrors_state() {
        let mut car = passenger();
        car.move_to_floor(Floor(6)).unwrap();
        car.add_load(3).unwrap();

        let status = car.status();
        assert_eq!(status.current_floor, Floor(6));
        assert_eq!(status.direction, Direction::Up);
        assert!(!status.moving);
        assert_eq!(status.load, 3);
    }

    #[test]
    fn snapshot_is_recomputed_not_cached() {
        let mut car = passenger();
        let first = car.status();
        car.move_to_floor(Floor(2)).unwrap();
        let second = car.status();
        assert_ne!(first, second);
        assert_eq!(first.current_floor, Floor::GROUND);
        assert_eq!(second.current_floor, Floor(2));
    }
}

// ── AccessPolicy ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod access {
    use super::*;

    #[test]
    fn unrestricted_allows_everything() {
        let policy = AccessPolicy::unrestricted();
        assert!(policy.allows(Floor(0)));
        assert!(policy.allows(Floor(u16::MAX)));
    }

    #[test]
    fn restricting_bars_listed_floors_only() {
        let policy = AccessPolicy::restricting([Floor(5), Floor(13)]);
        assert!(!policy.allows(Floor(5)));
        assert!(!policy.allows(Floor(13)));
        assert!(policy.allows(Floor(6)));
        assert_eq!(policy.restricted_floors(), &[Floor(5), Floor(13)]);
    }
}
