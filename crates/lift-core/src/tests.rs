//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ElevatorId, RequestId};

    #[test]
    fn ordering() {
        assert!(ElevatorId(0) < ElevatorId(1));
        assert!(RequestId(100) > RequestId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(ElevatorId::INVALID.0, u32::MAX);
        assert_eq!(RequestId::INVALID.0, u64::MAX);
        assert_eq!(ElevatorId::default(), ElevatorId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(ElevatorId(7).to_string(), "ElevatorId(7)");
    }
}

#[cfg(test)]
mod floor {
    use crate::{Direction, Floor, Floors};

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(3).distance_to(Floor(8)), 5);
        assert_eq!(Floor(8).distance_to(Floor(3)), 5);
        assert_eq!(Floor(5).distance_to(Floor(5)), 0);
    }

    #[test]
    fn step_moves_one_floor() {
        assert_eq!(Floor(4).step(Direction::Up), Floor(5));
        assert_eq!(Floor(4).step(Direction::Down), Floor(3));
        assert_eq!(Floor(4).step(Direction::Idle), Floor(4));
    }

    #[test]
    fn range_membership() {
        let floors = Floors::new(10);
        assert!(floors.contains(Floor(1)));
        assert!(floors.contains(Floor(10)));
        assert!(!floors.contains(Floor(0)));
        assert!(!floors.contains(Floor(11)));
        assert_eq!(floors.bottom(), Floor(1));
        assert_eq!(floors.top(), Floor(10));
    }

    #[test]
    fn beyond_up_excludes_current_floor() {
        let floors = Floors::new(10);
        assert_eq!(floors.beyond(Floor(6), Direction::Up), Some((Floor(7), Floor(10))));
        assert_eq!(floors.beyond(Floor(10), Direction::Up), None);
    }

    #[test]
    fn beyond_down_excludes_current_floor() {
        let floors = Floors::new(10);
        assert_eq!(floors.beyond(Floor(6), Direction::Down), Some((Floor(1), Floor(5))));
        assert_eq!(floors.beyond(Floor(1), Direction::Down), None);
    }

    #[test]
    fn beyond_idle_is_empty() {
        let floors = Floors::new(10);
        assert_eq!(floors.beyond(Floor(5), Direction::Idle), None);
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, Floor};

    #[test]
    fn reversal() {
        assert_eq!(Direction::Up.reversed(), Direction::Down);
        assert_eq!(Direction::Down.reversed(), Direction::Up);
        assert_eq!(Direction::Idle.reversed(), Direction::Idle);
    }

    #[test]
    fn toward_resolves_equal_floors_down() {
        assert_eq!(Direction::toward(Floor(2), Floor(7)), Direction::Up);
        assert_eq!(Direction::toward(Floor(7), Floor(2)), Direction::Down);
        assert_eq!(Direction::toward(Floor(5), Floor(5)), Direction::Down);
    }

    #[test]
    fn display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Idle.to_string(), "idle");
        assert_eq!(Direction::Down.arrow(), "↓");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_accrues_periods_and_waits() {
        let mut clock = SimClock::new(3);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.sim_elapsed_secs, 6);
        clock.wait(2); // one door-open
        assert_eq!(clock.sim_elapsed_secs, 8);
    }

    #[test]
    fn clock_hms() {
        let mut clock = SimClock::new(3600);
        clock.advance();
        clock.wait(90);
        let (h, m, s) = clock.elapsed_hms();
        assert_eq!((h, m, s), (1, 1, 30));
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn defaults_are_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.floor_count, 10);
        assert_eq!(cfg.elevator_count, 4);
        assert_eq!(cfg.min_riders_per_pickup, 1);
        assert_eq!(cfg.max_riders_per_pickup, 3);
    }

    #[test]
    fn zero_elevators_rejected() {
        let cfg = SimConfig { elevator_count: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_floors_rejected() {
        let cfg = SimConfig { floor_count: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn bad_probability_rejected() {
        let cfg = SimConfig { hall_call_probability: 1.5, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn empty_rider_range_rejected() {
        let cfg = SimConfig {
            min_riders_per_pickup: 3,
            max_riders_per_pickup: 1,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { min_riders_per_pickup: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1000);
            let b: u32 = r2.gen_range(0..1000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v: u8 = rng.gen_range(1..=10);
            assert!((1..=10).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn child_streams_diverge() {
        let mut root = SimRng::new(7);
        let mut c1 = root.child(1);
        let mut c2 = root.child(2);
        let a: u64 = c1.gen_range(0..u64::MAX);
        let b: u64 = c2.gen_range(0..u64::MAX);
        assert_ne!(a, b);
    }
}
