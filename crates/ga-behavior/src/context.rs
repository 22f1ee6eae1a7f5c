//! Read-only state handed to a policy for one agent's turn.

use ga_agent::{Message, MessageKind};
use ga_core::{AgentId, Cell, Tick};
use ga_world::{GridWorld, Planner};

/// What one agent can know about another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerView {
    pub id:       AgentId,
    pub position: Cell,
    pub active:   bool,
}

/// A read-only snapshot passed to [`DecisionPolicy::decide`][crate::DecisionPolicy::decide].
///
/// Rebuilt for each agent's turn, because agents earlier in the acting order
/// may already have moved or collected this tick.
pub struct DecisionContext<'a> {
    pub tick:    Tick,
    pub world:   &'a GridWorld,
    pub planner: &'a dyn Planner,
    /// Every other agent, in id order.
    pub peers:   &'a [PeerView],
    /// Messages drained for this agent at the start of the tick.
    pub inbox:   &'a [Message],
}

impl<'a> DecisionContext<'a> {
    #[inline]
    pub fn new(
        tick:    Tick,
        world:   &'a GridWorld,
        planner: &'a dyn Planner,
        peers:   &'a [PeerView],
        inbox:   &'a [Message],
    ) -> Self {
        Self { tick, world, planner, peers, inbox }
    }

    /// Payloads of inbox messages of `kind`, in arrival order, without
    /// duplicates.
    pub fn payloads(&self, kind: MessageKind) -> Vec<Cell> {
        let mut cells: Vec<Cell> = Vec::new();
        for m in self.inbox.iter().filter(|m| m.kind == kind) {
            if !cells.contains(&m.payload) {
                cells.push(m.payload);
            }
        }
        cells
    }

    /// Peers that can still act.
    pub fn active_peers(&self) -> impl Iterator<Item = &PeerView> + '_ {
        self.peers.iter().filter(|p| p.active)
    }

    /// Number of active peers strictly closer to `cell` than `distance`.
    pub fn active_peers_within(&self, cell: Cell, distance: u32) -> usize {
        self.active_peers()
            .filter(|p| p.position.manhattan(cell) < distance)
            .count()
    }
}
