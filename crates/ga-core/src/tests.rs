//! Unit tests for ga-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering_follows_creation_order() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(AgentId::default(), AgentId::INVALID);
        assert_eq!(AgentId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod cell {
    use crate::{Cell, Direction};

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 4);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn manhattan_with_negative_coords() {
        assert_eq!(Cell::new(-1, 2).manhattan(Cell::new(1, -2)), 6);
    }

    #[test]
    fn step_deltas() {
        let c = Cell::new(5, 5);
        assert_eq!(c.step(Direction::Up), Cell::new(5, 4));
        assert_eq!(c.step(Direction::Down), Cell::new(5, 6));
        assert_eq!(c.step(Direction::Left), Cell::new(4, 5));
        assert_eq!(c.step(Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn step_off_edge_is_representable() {
        assert_eq!(Cell::new(0, 0).step(Direction::Up), Cell::new(0, -1));
    }

    #[test]
    fn expansion_order_is_up_down_left_right() {
        assert_eq!(
            Direction::ALL,
            [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
        );
    }

    #[test]
    fn direction_to_neighbour() {
        let c = Cell::new(2, 2);
        for d in Direction::ALL {
            assert_eq!(c.direction_to(c.step(d)), Some(d));
            assert_eq!(c.step(d).step(d.opposite()), c);
        }
        assert_eq!(c.direction_to(Cell::new(3, 3)), None);
        assert_eq!(c.direction_to(c), None);
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(3, 4).to_string(), "(3, 4)");
        assert_eq!(Direction::Left.to_string(), "left");
    }
}

#[cfg(test)]
mod time {
    use crate::{GaError, SimConfig, Tick};

    #[test]
    fn tick_advance() {
        let mut t = Tick::ZERO;
        t.advance();
        t.advance();
        assert_eq!(t, Tick(2));
    }

    #[test]
    fn snapshot_interval() {
        let cfg = SimConfig { output_interval_ticks: 5, ..SimConfig::default() };
        assert!(cfg.is_snapshot_tick(Tick(0)));
        assert!(cfg.is_snapshot_tick(Tick(10)));
        assert!(!cfg.is_snapshot_tick(Tick(7)));

        let off = SimConfig { output_interval_ticks: 0, ..SimConfig::default() };
        assert!(!off.is_snapshot_tick(Tick(0)));
    }

    #[test]
    fn end_tick_is_budget() {
        let cfg = SimConfig { total_ticks: 150, ..SimConfig::default() };
        assert_eq!(cfg.end_tick(), Tick(150));
    }

    #[test]
    fn validate_rejects_zero_mailbox() {
        assert!(SimConfig::default().validate().is_ok());
        assert!(SimConfig { total_ticks: 0, ..SimConfig::default() }.validate().is_ok());
        let bad = SimConfig { mailbox_capacity: 0, ..SimConfig::default() };
        assert!(matches!(bad.validate(), Err(GaError::Config(_))));
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    fn draws(rng: &mut AgentRng) -> Vec<u32> {
        (0..20).map(|_| rng.gen_range(0..1_000_000)).collect()
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(0));
        assert_eq!(draws(&mut a), draws(&mut b));
    }

    #[test]
    fn different_agents_differ() {
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(1));
        assert_ne!(draws(&mut a), draws(&mut b));
    }

    #[test]
    fn gen_bool_extremes_are_certain() {
        let mut rng = AgentRng::new(3, AgentId(2));
        assert!((0..100).all(|_| rng.gen_bool(1.0)));
        assert!((0..100).all(|_| !rng.gen_bool(0.0)));
        assert!((0..100).all(|_| !rng.gen_bool(-0.5)));
    }

    #[test]
    fn cell_in_stays_in_bounds() {
        let mut rng = AgentRng::new(7, AgentId(3));
        for _ in 0..500 {
            let c = rng.cell_in(6, 4);
            assert!((0..6).contains(&c.x) && (0..4).contains(&c.y), "{c}");
        }
    }

    #[test]
    fn direction_covers_all_four() {
        let mut rng = AgentRng::new(1, AgentId(0));
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            seen.insert(rng.direction());
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn gaussian_mean_is_close() {
        let mut rng = SimRng::new(99);
        let n = 5_000;
        let mean = (0..n).map(|_| rng.gaussian(10.0, 2.0)).sum::<f64>() / n as f64;
        assert!((mean - 10.0).abs() < 0.2, "mean {mean}");
    }

    #[test]
    fn sim_rng_is_seeded() {
        let mut a = SimRng::new(5);
        let mut b = SimRng::new(5);
        for _ in 0..50 {
            assert_eq!(a.cell_in(9, 7), b.cell_in(9, 7));
        }
    }
}
