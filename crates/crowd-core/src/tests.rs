//! Unit tests for crowd-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, DestinationId, ObstacleId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering_follows_allocation() {
        assert!(AgentId(0) < AgentId(1));
        assert_eq!(AgentId(7).next(), AgentId(8));
    }

    #[test]
    fn destination_id_rejects_overflow() {
        assert!(DestinationId::try_from(70_000usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(ObstacleId(0).to_string(), "ObstacleId(0)");
    }
}

#[cfg(test)]
mod pos {
    use crate::{Direction, GridPos};

    #[test]
    fn step_follows_y_up_convention() {
        let p = GridPos::new(3, 3);
        assert_eq!(p.step(Direction::Up), GridPos::new(3, 4));
        assert_eq!(p.step(Direction::Down), GridPos::new(3, 2));
        assert_eq!(p.step(Direction::Left), GridPos::new(2, 3));
        assert_eq!(p.step(Direction::Right), GridPos::new(4, 3));
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(GridPos::new(0, 0).manhattan(GridPos::new(3, -4)), 7);
        assert_eq!(GridPos::new(5, 5).manhattan(GridPos::new(5, 5)), 0);
    }

    #[test]
    fn euclidean_distance() {
        let a = GridPos::new(0, 0);
        assert_eq!(a.distance_sq(GridPos::new(3, 4)), 25);
        assert!((a.distance(GridPos::new(3, 4)) - 5.0).abs() < 1e-12);
        assert!((a.distance(GridPos::new(1, 1)) - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn conversions() {
        assert_eq!(GridPos::from((1, 2)), GridPos::new(1, 2));
        assert_eq!(GridPos::from([4, 5]), GridPos::new(4, 5));
        assert_eq!(GridPos::new(1, 2).to_string(), "(1, 2)");
    }

    #[test]
    fn evaluation_orders() {
        assert_eq!(Direction::REPULSION_ORDER[0], Direction::Up);
        assert_eq!(Direction::ESCAPE_ORDER[0], Direction::Right);
    }
}

#[cfg(test)]
mod preset {
    use crate::{Preset, Rgb};

    #[test]
    fn parse() {
        assert_eq!("hold".parse::<Preset>().unwrap(), Preset::Hold);
        assert_eq!(" exit ".parse::<Preset>().unwrap(), Preset::Exit);
        assert!("wander".parse::<Preset>().is_err());
    }

    #[test]
    fn exit_flag_and_display() {
        assert!(Preset::Exit.is_exit());
        assert!(!Preset::Hold.is_exit());
        assert_eq!(Preset::Hold.to_string(), "hold");
    }

    #[test]
    fn rgb_from_array() {
        assert_eq!(Rgb::from([0, 0, 128]), Rgb::NAVY);
    }
}

#[cfg(test)]
mod time {
    use crate::{RunConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(3).to_string(), "T3");
    }

    #[test]
    fn run_config_end_tick() {
        let cfg = RunConfig { max_ticks: 250, ..RunConfig::default() };
        assert_eq!(cfg.end_tick(), Tick(250));
    }

    #[test]
    fn snapshot_interval() {
        let cfg = RunConfig { output_interval_ticks: 5, ..RunConfig::default() };
        assert!(cfg.snapshot_due(Tick(0)));
        assert!(!cfg.snapshot_due(Tick(4)));
        assert!(cfg.snapshot_due(Tick(10)));

        let off = RunConfig { output_interval_ticks: 0, ..RunConfig::default() };
        assert!(!off.snapshot_due(Tick(0)));
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
            let a: u64 = r1.gen_range(0..u64::MAX);
            let b: u64 = r2.gen_range(0..u64::MAX);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(3..7);
            assert!((3..7).contains(&v));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }
}
