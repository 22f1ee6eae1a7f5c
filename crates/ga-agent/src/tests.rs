//! Unit tests for ga-agent.

// ── SpatialMemory ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod memory {
    use ga_core::Cell;

    use crate::{AgentError, Region, SpatialMemory};

    fn mem() -> SpatialMemory {
        SpatialMemory::new(3).unwrap()
    }

    #[test]
    fn zero_region_size_rejected() {
        assert_eq!(SpatialMemory::new(0).unwrap_err(), AgentError::ZeroRegionSize);
    }

    #[test]
    fn region_of_uses_floor_division() {
        let m = mem();
        assert_eq!(m.region_of(Cell::new(0, 0)), Region { rx: 0, ry: 0 });
        assert_eq!(m.region_of(Cell::new(2, 2)), Region { rx: 0, ry: 0 });
        assert_eq!(m.region_of(Cell::new(3, 8)), Region { rx: 1, ry: 2 });
        assert_eq!(m.region_of(Cell::new(-1, 0)), Region { rx: -1, ry: 0 });
    }

    #[test]
    fn region_bounds_are_inclusive() {
        let m = mem();
        let (min, max) = m.region_bounds(Region { rx: 1, ry: 2 });
        assert_eq!(min, Cell::new(3, 6));
        assert_eq!(max, Cell::new(5, 8));
    }

    #[test]
    fn density_is_discoveries_over_visits() {
        let mut m = mem();
        m.register_visit(Cell::new(0, 0), true);
        m.register_visit(Cell::new(1, 1), false);
        m.register_visit(Cell::new(2, 0), false);
        m.register_visit(Cell::new(2, 2), true);
        let s = m.stats(Region { rx: 0, ry: 0 }).unwrap();
        assert_eq!((s.visits, s.discoveries), (4, 2));
        assert!((s.density - 0.5).abs() < 1e-12);
        assert!((m.density_at(Cell::new(1, 2)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn unvisited_region_has_zero_density() {
        let m = mem();
        assert_eq!(m.density_at(Cell::new(7, 7)), 0.0);
        assert_eq!(m.regions_explored(), 0);
    }

    #[test]
    fn best_region_none_without_discoveries() {
        let mut m = mem();
        assert_eq!(m.best_region(), None);
        m.register_visit(Cell::new(0, 0), false);
        m.register_visit(Cell::new(4, 4), false);
        assert_eq!(m.best_region(), None);
    }

    #[test]
    fn best_region_picks_highest_density() {
        let mut m = mem();
        m.register_visit(Cell::new(0, 0), true);
        m.register_visit(Cell::new(0, 0), false); // 0.5
        m.register_visit(Cell::new(6, 6), true); // 1.0
        m.register_visit(Cell::new(3, 0), false); // 0.0
        assert_eq!(m.best_region(), Some(Region { rx: 2, ry: 2 }));
    }

    #[test]
    fn best_region_tie_goes_to_smallest_key() {
        let mut m = mem();
        m.register_visit(Cell::new(7, 7), true);
        m.register_visit(Cell::new(0, 4), true);
        m.register_visit(Cell::new(4, 0), true);
        assert_eq!(m.best_region(), Some(Region { rx: 0, ry: 1 }));
    }

    #[test]
    fn summary_pools_counts() {
        let mut m = mem();
        m.register_visit(Cell::new(0, 0), true);
        m.register_visit(Cell::new(0, 0), false);
        m.register_visit(Cell::new(5, 5), false);
        m.register_visit(Cell::new(5, 5), false);
        let s = m.summary();
        assert_eq!(s.regions_explored, 2);
        assert_eq!(s.total_visits, 4);
        assert_eq!(s.total_discoveries, 1);
        assert!((s.average_density - 0.25).abs() < 1e-12);
    }

    #[test]
    fn empty_summary_is_zero() {
        let s = mem().summary();
        assert_eq!(s.total_visits, 0);
        assert_eq!(s.average_density, 0.0);
    }
}

#[cfg(test)]
mod memory_properties {
    use proptest::prelude::*;

    use ga_core::Cell;

    use crate::SpatialMemory;

    proptest! {
        #[test]
        fn density_bounded_and_exact(
            size in 1u32..5,
            visits in prop::collection::vec((0i32..15, 0i32..15, any::<bool>()), 0..200),
        ) {
            let mut m = SpatialMemory::new(size).unwrap();
            for &(x, y, found) in &visits {
                m.register_visit(Cell::new(x, y), found);
            }
            let side = 15u32.div_ceil(size) as usize;
            prop_assert!(m.regions_explored() <= side * side);
            for (_, s) in m.regions() {
                prop_assert!(s.visits > 0);
                prop_assert!((0.0..=1.0).contains(&s.density));
                prop_assert_eq!(s.density, f64::from(s.discoveries) / f64::from(s.visits));
            }
            let total: u64 = m.regions().map(|(_, s)| u64::from(s.visits)).sum();
            prop_assert_eq!(total, visits.len() as u64);
        }
    }
}

// ── Mailboxes ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mailbox {
    use ga_core::{AgentId, Cell};

    use crate::{AgentError, Mailbox, Mailboxes, Message, MessageKind};

    fn msg(sender: u32, x: i32) -> Message {
        Message { sender: AgentId(sender), kind: MessageKind::ResourceSighted, payload: Cell::new(x, 0) }
    }

    #[test]
    fn drain_twice_second_is_empty() {
        let mut boxes = Mailboxes::new(3, 8).unwrap();
        boxes.broadcast(AgentId(0), MessageKind::TargetReserved, Cell::new(5, 5));
        let first = boxes.drain(AgentId(1)).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].payload, Cell::new(5, 5));
        assert_eq!(first[0].kind, MessageKind::TargetReserved);
        assert!(boxes.drain(AgentId(1)).unwrap().is_empty());
    }

    #[test]
    fn sender_does_not_receive_own_broadcast() {
        let mut boxes = Mailboxes::new(3, 8).unwrap();
        let delivered = boxes.broadcast(AgentId(1), MessageKind::ResourceSighted, Cell::new(1, 1));
        assert_eq!(delivered, 2);
        assert!(boxes.drain(AgentId(1)).unwrap().is_empty());
        assert_eq!(boxes.drain(AgentId(0)).unwrap().len(), 1);
        assert_eq!(boxes.drain(AgentId(2)).unwrap().len(), 1);
    }

    #[test]
    fn explicit_recipients_only() {
        let mut boxes = Mailboxes::new(4, 8).unwrap();
        let n = boxes.send(
            AgentId(0),
            [AgentId(0), AgentId(2), AgentId(9)],
            MessageKind::TargetReserved,
            Cell::new(0, 0),
        );
        assert_eq!(n, 1);
        assert!(boxes.get(AgentId(1)).unwrap().is_empty());
        assert_eq!(boxes.get(AgentId(2)).unwrap().len(), 1);
    }

    #[test]
    fn per_recipient_append_order_kept() {
        let mut boxes = Mailboxes::new(3, 8).unwrap();
        boxes.broadcast(AgentId(0), MessageKind::ResourceSighted, Cell::new(1, 0));
        boxes.broadcast(AgentId(1), MessageKind::ResourceSighted, Cell::new(2, 0));
        let got: Vec<_> = boxes.drain(AgentId(2)).unwrap().iter().map(|m| m.payload.x).collect();
        assert_eq!(got, [1, 2]);
    }

    #[test]
    fn full_mailbox_drops_oldest() {
        let mut mb = Mailbox::new(2).unwrap();
        mb.push(msg(0, 1));
        mb.push(msg(0, 2));
        mb.push(msg(0, 3));
        assert_eq!(mb.dropped(), 1);
        let got: Vec<_> = mb.drain().iter().map(|m| m.payload.x).collect();
        assert_eq!(got, [2, 3]);
    }

    fn reserve(sender: u32, x: i32) -> Message {
        Message { sender: AgentId(sender), kind: MessageKind::TargetReserved, payload: Cell::new(x, 0) }
    }

    #[test]
    fn overflow_evicts_sightings_before_reservations() {
        let mut mb = Mailbox::new(3).unwrap();
        mb.push(reserve(0, 1));
        mb.push(msg(0, 2));
        mb.push(msg(0, 3));
        mb.push(reserve(1, 4));
        mb.push(msg(1, 5));
        assert_eq!(mb.dropped(), 2);
        let got: Vec<_> = mb.drain().iter().map(|m| (m.kind, m.payload.x)).collect();
        assert_eq!(
            got,
            [
                (MessageKind::TargetReserved, 1),
                (MessageKind::TargetReserved, 4),
                (MessageKind::ResourceSighted, 5),
            ]
        );
    }

    #[test]
    fn sighting_into_reservation_only_queue_is_dropped() {
        let mut mb = Mailbox::new(2).unwrap();
        mb.push(reserve(0, 1));
        mb.push(reserve(1, 2));
        mb.push(msg(2, 3));
        assert_eq!(mb.dropped(), 1);
        let got: Vec<_> = mb.drain().iter().map(|m| m.payload.x).collect();
        assert_eq!(got, [1, 2]);
    }

    #[test]
    fn reservation_overflow_drops_oldest_reservation() {
        let mut mb = Mailbox::new(2).unwrap();
        mb.push(reserve(0, 1));
        mb.push(reserve(1, 2));
        mb.push(reserve(2, 3));
        assert_eq!(mb.dropped(), 1);
        let got: Vec<_> = mb.drain().iter().map(|m| m.payload.x).collect();
        assert_eq!(got, [2, 3]);
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(Mailbox::new(0).unwrap_err(), AgentError::ZeroMailboxCapacity);
        assert!(Mailboxes::new(2, 0).is_err());
    }

    #[test]
    fn unknown_agent_drain_errors() {
        let mut boxes = Mailboxes::new(1, 4).unwrap();
        assert_eq!(boxes.drain(AgentId(5)).unwrap_err(), AgentError::AgentNotFound(AgentId(5)));
    }
}

// ── AgentState ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod state {
    use ga_core::{AgentId, Cell, Direction};
    use ga_world::{Path, ResourceKind, Soiling};

    use crate::{AgentState, AgentStatus, PolicyKind, INITIAL_ENERGY};

    fn agent() -> AgentState {
        AgentState::new(AgentId(0), PolicyKind::GoalBased, Cell::new(1, 1))
    }

    #[test]
    fn new_agent_defaults() {
        let a = agent();
        assert!(a.is_active());
        assert_eq!(a.energy, INITIAL_ENERGY);
        assert_eq!(a.goal, None);
        assert!(a.plan.is_empty());
        assert!(a.has_visited(Cell::new(1, 1)));
    }

    #[test]
    fn changing_goal_discards_plan() {
        let mut a = agent();
        a.set_goal(Cell::new(3, 1));
        a.plan = [Direction::Right, Direction::Right].into_iter().collect::<Path>();
        a.set_goal(Cell::new(3, 1));
        assert_eq!(a.plan.len(), 2, "same goal keeps the plan");
        a.set_goal(Cell::new(0, 0));
        assert!(a.plan.is_empty());
    }

    #[test]
    fn move_to_tracks_visits() {
        let mut a = agent();
        a.move_to(Cell::new(2, 1));
        assert_eq!(a.position, Cell::new(2, 1));
        assert!(a.has_visited(Cell::new(2, 1)));
        assert_eq!(a.counters.moves_made, 1);
    }

    #[test]
    fn collection_credits_value_and_work() {
        let mut a = agent();
        a.record_collection(ResourceKind::Dirt(Soiling::Severe), 0.0);
        assert_eq!(a.counters.resources_collected, 1);
        assert_eq!(a.counters.points, 3);
        assert_eq!(a.busy_ticks, 2);
        a.record_collection(ResourceKind::Food, 30.0);
        assert_eq!(a.energy, INITIAL_ENERGY + 30.0);
        assert_eq!(a.counters.collected_by_kind[&ResourceKind::Food], 1);
    }

    #[test]
    fn incapacitate_is_terminal_and_clears_goal() {
        let mut a = agent();
        a.set_goal(Cell::new(4, 4));
        a.incapacitate();
        assert_eq!(a.status, AgentStatus::Incapacitated);
        assert!(!a.is_active());
        assert_eq!(a.goal, None);
    }

    #[test]
    fn policy_labels() {
        use crate::CompetitiveStrategy;
        assert_eq!(PolicyKind::EpsilonGreedy.to_string(), "epsilon-greedy");
        assert_eq!(PolicyKind::Competitive(CompetitiveStrategy::Balanced).label(), "balanced");
    }
}

// ── Store & builder ───────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use ga_core::{AgentId, Cell};

    use crate::{AgentStoreBuilder, PolicyKind};

    #[test]
    fn builder_assigns_ids_in_order() {
        let mut b = AgentStoreBuilder::new(1);
        let a = b.add(PolicyKind::Reactive, Cell::new(0, 0));
        let c = b.add(PolicyKind::Cooperative, Cell::new(2, 2));
        assert_eq!((a, c), (AgentId(0), AgentId(1)));
        let (store, rngs) = b.build().unwrap();
        assert_eq!(store.count(), 2);
        assert_eq!(rngs.len(), 2);
        assert_eq!(store.mailboxes.len(), 2);
        assert_eq!(store.get(AgentId(1)).unwrap().policy, PolicyKind::Cooperative);
        assert_eq!(store.agent_ids().collect::<Vec<_>>(), [AgentId(0), AgentId(1)]);
    }

    #[test]
    fn empty_store() {
        let (store, rngs) = AgentStoreBuilder::new(1).build().unwrap();
        assert!(store.is_empty());
        assert!(rngs.is_empty());
        assert!(!store.all_incapacitated());
    }

    #[test]
    fn all_incapacitated_tracks_status() {
        let (mut store, _) = AgentStoreBuilder::new(1)
            .agent(PolicyKind::GoalBased, Cell::new(0, 0))
            .agent(PolicyKind::GoalBased, Cell::new(1, 0))
            .build()
            .unwrap();
        store.get_mut(AgentId(0)).unwrap().incapacitate();
        assert_eq!(store.active_count(), 1);
        assert!(!store.all_incapacitated());
        store.get_mut(AgentId(1)).unwrap().incapacitate();
        assert!(store.all_incapacitated());
    }

    #[test]
    fn mailbox_capacity_is_applied() {
        let (store, _) = AgentStoreBuilder::new(1)
            .mailbox_capacity(3)
            .agent(PolicyKind::Cooperative, Cell::new(0, 0))
            .build()
            .unwrap();
        assert_eq!(store.mailboxes.get(AgentId(0)).unwrap().capacity(), 3);
    }
}
